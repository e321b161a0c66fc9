pub const G: f64 = 6.67430e-11; // Gravitational constant (m³/kg/s²)
pub const M_EARTH: f64 = 5.972e24; // Mass of Earth (kg)
pub const MU_EARTH: f64 = G * M_EARTH; // Earth's gravitational parameter (m³/s²)
pub const R_EARTH: f64 = 6.371e6; // Mean radius of Earth (m)

// Geodesy
pub const WGS84_A: f64 = 6378137.0; // Semi-major axis [m]
pub const WGS84_F: f64 = 1.0 / 298.257223563; // Flattening

// Standard atmosphere
pub const G0: f64 = 9.80665; // Standard gravity (m/s²)
pub const R_AIR: f64 = 287.05; // Specific gas constant for dry air (J/(kg·K))
pub const GAMMA_AIR: f64 = 1.4; // Heat capacity ratio for air
pub const SEA_LEVEL_TEMPERATURE: f64 = 288.15; // K
pub const SEA_LEVEL_PRESSURE: f64 = 101_325.0; // Pa
pub const ISA_CEILING: f64 = 86_000.0; // Highest altitude the model accepts (m)

// Sutherland's law for air
pub const SUTHERLAND_MU_REF: f64 = 1.716e-5; // Reference dynamic viscosity (Pa·s)
pub const SUTHERLAND_T_REF: f64 = 273.15; // Reference temperature (K)
pub const SUTHERLAND_S: f64 = 110.4; // Sutherland temperature (K)

// Math
pub const PI: f64 = std::f64::consts::PI;
