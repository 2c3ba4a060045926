pub mod easy_dice;
