// src/dice/geometry.rs
//
// Face tables for each polyhedron, in the die's unrotated frame with +Y up.
// Opposite faces of the D8, D10, D12 and D20 add up to sides + 1.

use crate::dice::DieFace;
use crate::models::Vector3;

/// 1/sqrt(3)
const INV_SQRT_3: f64 = 0.5773502691896258;

/// Icosahedron vertex components, normalised: (0, 1, phi) / |(0, 1, phi)|.
const ICO_MINOR: f64 = 0.5257311121191336;
const ICO_MAJOR: f64 = 0.85065080835204;

/// Dodecahedron vertex components, normalised: (0, 1/phi, phi) / sqrt(3).
const DODECA_MINOR: f64 = 0.35682208977308993;
const DODECA_MAJOR: f64 = 0.9341723589627158;

/// Pentagonal trapezohedron faces lean 26.565 degrees (atan 1/2) off the equator.
const TRAP_RISE: f64 = 0.4472135954999579;
const TRAP_RIM: f64 = 0.8944271909999159;
/// Rim components at azimuths 72 and 144 degrees (and their mirrors).
const TRAP_NEAR: f64 = 0.27639320225002103;
const TRAP_FAR: f64 = 0.7236067977499789;

/// Apex directions of a tetrahedron. The D4 is read at its top vertex, so the entry that
/// points up carries the rolled value.
pub const D4_FACES: [DieFace; 4] = [
    DieFace::new("1", 1, (INV_SQRT_3, INV_SQRT_3, INV_SQRT_3)),
    DieFace::new("2", 2, (INV_SQRT_3, -INV_SQRT_3, -INV_SQRT_3)),
    DieFace::new("3", 3, (-INV_SQRT_3, INV_SQRT_3, -INV_SQRT_3)),
    DieFace::new("4", 4, (-INV_SQRT_3, -INV_SQRT_3, INV_SQRT_3)),
];

pub const D6_FACES: [DieFace; 6] = [
    DieFace::new("1", 1, (0.0, 1.0, 0.0)),
    DieFace::new("6", 6, (0.0, -1.0, 0.0)),
    DieFace::new("2", 2, (0.0, 0.0, 1.0)),
    DieFace::new("5", 5, (0.0, 0.0, -1.0)),
    DieFace::new("3", 3, (1.0, 0.0, 0.0)),
    DieFace::new("4", 4, (-1.0, 0.0, 0.0)),
];

pub const D8_FACES: [DieFace; 8] = [
    DieFace::new("1", 1, (INV_SQRT_3, INV_SQRT_3, INV_SQRT_3)),
    DieFace::new("2", 2, (INV_SQRT_3, INV_SQRT_3, -INV_SQRT_3)),
    DieFace::new("3", 3, (-INV_SQRT_3, INV_SQRT_3, INV_SQRT_3)),
    DieFace::new("4", 4, (-INV_SQRT_3, INV_SQRT_3, -INV_SQRT_3)),
    DieFace::new("5", 5, (INV_SQRT_3, -INV_SQRT_3, INV_SQRT_3)),
    DieFace::new("6", 6, (INV_SQRT_3, -INV_SQRT_3, -INV_SQRT_3)),
    DieFace::new("7", 7, (-INV_SQRT_3, -INV_SQRT_3, INV_SQRT_3)),
    DieFace::new("8", 8, (-INV_SQRT_3, -INV_SQRT_3, -INV_SQRT_3)),
];

/// Shared by the D10 and the percentile die. Upper ring first, then the lower ring offset by 36 degrees.
pub const D10_NORMALS: [Vector3; 10] = [
    (TRAP_RIM, TRAP_RISE, 0.0),
    (TRAP_NEAR, TRAP_RISE, ICO_MAJOR),
    (-TRAP_FAR, TRAP_RISE, ICO_MINOR),
    (-TRAP_FAR, TRAP_RISE, -ICO_MINOR),
    (TRAP_NEAR, TRAP_RISE, -ICO_MAJOR),
    (TRAP_FAR, -TRAP_RISE, ICO_MINOR),
    (-TRAP_NEAR, -TRAP_RISE, ICO_MAJOR),
    (-TRAP_RIM, -TRAP_RISE, 0.0),
    (-TRAP_NEAR, -TRAP_RISE, -ICO_MAJOR),
    (TRAP_FAR, -TRAP_RISE, -ICO_MINOR),
];

pub const D10_FACES: [DieFace; 10] = [
    DieFace::new("1", 1, D10_NORMALS[0]),
    DieFace::new("3", 3, D10_NORMALS[1]),
    DieFace::new("5", 5, D10_NORMALS[2]),
    DieFace::new("7", 7, D10_NORMALS[3]),
    DieFace::new("9", 9, D10_NORMALS[4]),
    DieFace::new("4", 4, D10_NORMALS[5]),
    DieFace::new("2", 2, D10_NORMALS[6]),
    DieFace::new("0", 10, D10_NORMALS[7]),
    DieFace::new("8", 8, D10_NORMALS[8]),
    DieFace::new("6", 6, D10_NORMALS[9]),
];

/// D10 relabelled in tens: label gains a trailing `0`, value is multiplied by ten.
pub const D_PERCENT_FACES: [DieFace; 10] = [
    DieFace::new("10", 10, D10_NORMALS[0]),
    DieFace::new("30", 30, D10_NORMALS[1]),
    DieFace::new("50", 50, D10_NORMALS[2]),
    DieFace::new("70", 70, D10_NORMALS[3]),
    DieFace::new("90", 90, D10_NORMALS[4]),
    DieFace::new("40", 40, D10_NORMALS[5]),
    DieFace::new("20", 20, D10_NORMALS[6]),
    DieFace::new("00", 100, D10_NORMALS[7]),
    DieFace::new("80", 80, D10_NORMALS[8]),
    DieFace::new("60", 60, D10_NORMALS[9]),
];

pub const D12_FACES: [DieFace; 12] = [
    DieFace::new("1", 1, (0.0, ICO_MINOR, ICO_MAJOR)),
    DieFace::new("2", 2, (0.0, ICO_MINOR, -ICO_MAJOR)),
    DieFace::new("3", 3, (ICO_MINOR, ICO_MAJOR, 0.0)),
    DieFace::new("4", 4, (-ICO_MINOR, ICO_MAJOR, 0.0)),
    DieFace::new("5", 5, (ICO_MAJOR, 0.0, ICO_MINOR)),
    DieFace::new("6", 6, (ICO_MAJOR, 0.0, -ICO_MINOR)),
    DieFace::new("7", 7, (-ICO_MAJOR, 0.0, ICO_MINOR)),
    DieFace::new("8", 8, (-ICO_MAJOR, 0.0, -ICO_MINOR)),
    DieFace::new("9", 9, (ICO_MINOR, -ICO_MAJOR, 0.0)),
    DieFace::new("10", 10, (-ICO_MINOR, -ICO_MAJOR, 0.0)),
    DieFace::new("11", 11, (0.0, -ICO_MINOR, ICO_MAJOR)),
    DieFace::new("12", 12, (0.0, -ICO_MINOR, -ICO_MAJOR)),
];

pub const D20_FACES: [DieFace; 20] = [
    DieFace::new("1", 1, (INV_SQRT_3, INV_SQRT_3, INV_SQRT_3)),
    DieFace::new("2", 2, (INV_SQRT_3, INV_SQRT_3, -INV_SQRT_3)),
    DieFace::new("3", 3, (-INV_SQRT_3, INV_SQRT_3, INV_SQRT_3)),
    DieFace::new("4", 4, (-INV_SQRT_3, INV_SQRT_3, -INV_SQRT_3)),
    DieFace::new("5", 5, (0.0, DODECA_MINOR, DODECA_MAJOR)),
    DieFace::new("6", 6, (0.0, -DODECA_MINOR, DODECA_MAJOR)),
    DieFace::new("7", 7, (DODECA_MINOR, DODECA_MAJOR, 0.0)),
    DieFace::new("8", 8, (-DODECA_MINOR, DODECA_MAJOR, 0.0)),
    DieFace::new("9", 9, (DODECA_MAJOR, 0.0, DODECA_MINOR)),
    DieFace::new("10", 10, (DODECA_MAJOR, 0.0, -DODECA_MINOR)),
    DieFace::new("11", 11, (-DODECA_MAJOR, 0.0, DODECA_MINOR)),
    DieFace::new("12", 12, (-DODECA_MAJOR, 0.0, -DODECA_MINOR)),
    DieFace::new("13", 13, (DODECA_MINOR, -DODECA_MAJOR, 0.0)),
    DieFace::new("14", 14, (-DODECA_MINOR, -DODECA_MAJOR, 0.0)),
    DieFace::new("15", 15, (0.0, DODECA_MINOR, -DODECA_MAJOR)),
    DieFace::new("16", 16, (0.0, -DODECA_MINOR, -DODECA_MAJOR)),
    DieFace::new("17", 17, (INV_SQRT_3, -INV_SQRT_3, INV_SQRT_3)),
    DieFace::new("18", 18, (INV_SQRT_3, -INV_SQRT_3, -INV_SQRT_3)),
    DieFace::new("19", 19, (-INV_SQRT_3, -INV_SQRT_3, INV_SQRT_3)),
    DieFace::new("20", 20, (-INV_SQRT_3, -INV_SQRT_3, -INV_SQRT_3)),
];
