// rs_dice_wasm/src/lib.rs
// This is the public API for the wasm wrapper of the dice library.

use wasm_bindgen::prelude::*;
use web_sys::console;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_dice::apis::easy_dice::EasyDice;
use rs_dice::models::{DieMotion, Quaternion};
use rs_dice::session::{CountStatus, RollSession};

/// Values per die returned by `roll`: position (3), rotation w x y z (4), impulse (3), torque (3).
pub const LAUNCH_STRIDE: usize = 13;
/// Values per die expected by `tick`: rotation w x y z (4), linear velocity (3), angular velocity (3).
pub const MOTION_STRIDE: usize = 10;

#[wasm_bindgen]
pub struct WasmDiceTray {
    dice: EasyDice,
    session: RollSession,
    rng: StdRng,
}

#[wasm_bindgen]
impl WasmDiceTray {
    #[wasm_bindgen(constructor)]
    pub fn new(group: &str, seed: u64) -> Result<WasmDiceTray, JsValue> {
        let dice = EasyDice::new();
        let session = dice.new_session(group).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            dice,
            session,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    #[wasm_bindgen]
    pub fn select_group(&mut self, group: &str) -> Result<(), JsValue> {
        self.session
            .select_group(group)
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Returns true when the count was clamped to the maximum.
    #[wasm_bindgen]
    pub fn set_count(&mut self, text: &str) -> Result<bool, JsValue> {
        self.session
            .set_dice_count_from_input(text)
            .map(|status| status == CountStatus::Clamped)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Starts a roll and returns the flattened launch parameters of every physical die.
    #[wasm_bindgen]
    pub fn roll(&mut self) -> Vec<f64> {
        let launches = self.dice.roll(&mut self.session, &mut self.rng);
        let mut flat = Vec::with_capacity(launches.len() * LAUNCH_STRIDE);
        for launch in launches {
            let (px, py, pz) = launch.position;
            let q = launch.rotation;
            let (ix, iy, iz) = launch.impulse;
            let (tx, ty, tz) = launch.torque;
            flat.extend_from_slice(&[px, py, pz, q.w, q.x, q.y, q.z, ix, iy, iz, tx, ty, tz]);
        }
        flat
    }

    /// Names of the physical dice in the order `roll` and `tick` use.
    #[wasm_bindgen]
    pub fn die_names(&self) -> Vec<String> {
        self.session
            .rolled_dice()
            .iter()
            .map(|die| die.name.to_string())
            .collect()
    }

    /// Feeds one physics step. Returns true on the step at which the dice settle.
    #[wasm_bindgen]
    pub fn tick(&mut self, dt: f64, motions: Vec<f64>) -> Result<bool, JsValue> {
        if motions.len() % MOTION_STRIDE != 0 {
            return Err(JsValue::from_str(&format!(
                "Motion buffer length {} is not a multiple of {}",
                motions.len(),
                MOTION_STRIDE
            )));
        }
        let motions: Vec<DieMotion> = motions
            .chunks_exact(MOTION_STRIDE)
            .map(|m| {
                DieMotion::new(
                    Quaternion::new(m[0], m[1], m[2], m[3]),
                    (m[4], m[5], m[6]),
                    (m[7], m[8], m[9]),
                )
            })
            .collect();

        match self.session.tick(dt, &motions) {
            Ok(Some(outcome)) => {
                console::log_1(&JsValue::from_str(&format!("Rolled {} (total {})", outcome.display_value, outcome.total)));
                Ok(true)
            }
            Ok(None) => Ok(false),
            Err(e) => Err(JsValue::from_str(&e.to_string())),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn display(&self) -> Option<String> {
        self.session.outcome().map(|outcome| outcome.display_value.clone())
    }

    #[wasm_bindgen(getter)]
    pub fn total(&self) -> Option<u32> {
        self.session.outcome().map(|outcome| outcome.total)
    }
}
