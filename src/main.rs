use aerocalc::atmosphere::profile::standard_profile;
use aerocalc::atmosphere::{AtmosphereModel, IsaResult};
use aerocalc::config::profile::ProfileConfig;
use aerocalc::constants::R_EARTH;
use aerocalc::coordinates::{ecef_to_geodetic, geodetic_to_ecef, GeodeticPosition};
use aerocalc::physics::mach::mach_at_altitude;
use aerocalc::physics::orbital::OrbitalMechanics;
use aerocalc::physics::reynolds::reynolds_at_altitude;
use aerocalc::physics::thrust::thrust_to_weight;
use aerocalc::units::{kelvin_to_celsius, meters_to_feet, pascals_to_hectopascals};
use csv::Writer;
use log::info;
use nalgebra as na;
use std::error::Error;
use std::fs::{self, File};

const USAGE: &str = "usage: aerocalc <command> <args>
  altitude <m>                    ISA state at a geometric altitude
  pressure <Pa>                   ISA state at a static pressure
  temperature <K>                 ISA state at a temperature
  profile [start end step]        write the ISA table to output/isa_profile.csv
  mach <speed m/s> <altitude m>   Mach number in the standard atmosphere
  reynolds <speed m/s> <length m> <altitude m>
  geodetic <lat deg> <lon deg> <height m>   convert to ECEF
  ecef <x m> <y m> <z m>          convert to geodetic
  orbit <altitude m>              circular orbit summary
  hohmann <altitude1 m> <altitude2 m>
  twr <thrust N> <mass kg>        thrust-to-weight ratio";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, rest) = match args.split_first() {
        Some((command, rest)) => (command.as_str(), rest),
        None => return Err(USAGE.into()),
    };

    match command {
        "altitude" => print_isa(&AtmosphereModel::from_altitude(arg(rest, 0)?)?),
        "pressure" => print_isa(&AtmosphereModel::from_pressure(arg(rest, 0)?)?),
        "temperature" => print_isa(&AtmosphereModel::from_temperature(arg(rest, 0)?)?),
        "profile" => write_profile(rest)?,
        "mach" => {
            let result = mach_at_altitude(arg(rest, 0)?, arg(rest, 1)?)?;
            println!("Mach number:    {:.4} ({})", result.mach, result.regime);
            println!("Speed of sound: {:.2} m/s", result.speed_of_sound);
            println!("Temperature:    {:.2} K", result.temperature);
        }
        "reynolds" => {
            let result = reynolds_at_altitude(arg(rest, 0)?, arg(rest, 1)?, arg(rest, 2)?)?;
            println!("Reynolds number:   {:.4e} ({})", result.reynolds, result.regime);
            println!("Density:           {:.5} kg/m³", result.density);
            println!("Dynamic viscosity: {:.4e} Pa·s", result.dynamic_viscosity);
        }
        "geodetic" => {
            let position = GeodeticPosition::new(arg(rest, 0)?, arg(rest, 1)?, arg(rest, 2)?)?;
            let ecef = geodetic_to_ecef(&position);
            println!("ECEF: x = {:.3} m, y = {:.3} m, z = {:.3} m", ecef.x, ecef.y, ecef.z);
        }
        "ecef" => {
            let ecef = na::Vector3::new(arg(rest, 0)?, arg(rest, 1)?, arg(rest, 2)?);
            let position = ecef_to_geodetic(&ecef)?;
            println!(
                "Geodetic: lat = {:.8}°, lon = {:.8}°, height = {:.3} m",
                position.latitude, position.longitude, position.altitude
            );
        }
        "orbit" => {
            let orbit = OrbitalMechanics::circular_orbit(arg(rest, 0)?)?;
            println!("Radius:          {:.1} km", orbit.radius / 1000.0);
            println!("Velocity:        {:.2} m/s", orbit.velocity);
            println!("Escape velocity: {:.2} m/s", orbit.escape_velocity);
            println!("Period:          {}", orbit.period);
        }
        "hohmann" => {
            let r1 = R_EARTH + arg(rest, 0)?;
            let r2 = R_EARTH + arg(rest, 1)?;
            let transfer = OrbitalMechanics::hohmann_transfer(r1, r2)?;
            println!("Departure burn: {:.2} m/s", transfer.departure_delta_v);
            println!("Arrival burn:   {:.2} m/s", transfer.arrival_delta_v);
            println!("Total Δv:       {:.2} m/s", transfer.total_delta_v);
            println!("Transfer time:  {}", transfer.transfer_time);
        }
        "twr" => {
            let result = thrust_to_weight(arg(rest, 0)?, arg(rest, 1)?)?;
            println!("Thrust-to-weight: {:.3}", result.ratio);
            println!("Weight:           {:.1} N", result.weight);
            println!("Can lift off:     {}", result.can_lift_off);
        }
        _ => return Err(format!("unknown command '{}'\n{}", command, USAGE).into()),
    }

    Ok(())
}

fn arg(args: &[String], index: usize) -> Result<f64, Box<dyn Error>> {
    let raw = args
        .get(index)
        .ok_or_else(|| format!("missing argument {}\n{}", index + 1, USAGE))?;
    Ok(raw.parse::<f64>()?)
}

fn print_isa(result: &IsaResult) {
    println!("Layer:       {}", result.layer);
    println!(
        "Altitude:    {:.2} m ({:.0} ft)",
        result.altitude,
        meters_to_feet(result.altitude)
    );
    println!(
        "Temperature: {:.2} K ({:.2} °C)",
        result.temperature,
        kelvin_to_celsius(result.temperature)
    );
    println!(
        "Pressure:    {:.3} Pa ({:.3} hPa)",
        result.pressure,
        pascals_to_hectopascals(result.pressure)
    );
    println!("Density:     {:.6} kg/m³", result.density);
}

fn write_profile(args: &[String]) -> Result<(), Box<dyn Error>> {
    let config = if args.is_empty() {
        ProfileConfig::default()
    } else {
        ProfileConfig::with_range(arg(args, 0)?, arg(args, 1)?, arg(args, 2)?)
    };

    let rows = standard_profile(&config)?;

    // Create output directory if it doesn't exist
    fs::create_dir_all(&config.output_dir)?;
    let path = config.output_path();
    let mut writer = Writer::from_writer(File::create(&path)?);
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!("Wrote {} profile rows", rows.len());
    println!("Atmosphere profile has been written to {}", path.display());
    Ok(())
}
