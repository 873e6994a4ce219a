use clap::{Parser, Subcommand, ValueEnum};
use glam::{Vec2, Vec3A};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser, Debug)]
#[command(name = "eyeray")]
#[command(about = "Build camera eye rays and test them against axis-aligned boxes")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, global = true, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Perspective eye ray through an image-plane point
    Persp {
        #[command(flatten)]
        view: ViewArgs,

        /// Vertical field of view in degrees
        #[arg(long, default_value = "90")]
        vfov: f32,
    },

    /// Orthographic eye ray through an image-plane point
    Ortho {
        #[command(flatten)]
        view: ViewArgs,

        /// Half the view height in world units
        #[arg(long, default_value = "1")]
        half_height: f32,
    },

    /// Slab test of a ray against an axis-aligned box
    Hit {
        /// Ray origin as X,Y,Z
        #[arg(long, value_parser = parse_vec3a, allow_hyphen_values = true)]
        origin: Vec3A,

        /// Ray direction as X,Y,Z
        #[arg(long, value_parser = parse_vec3a, allow_hyphen_values = true)]
        direction: Vec3A,

        /// Box min corner as X,Y,Z
        #[arg(long, value_parser = parse_vec3a, allow_hyphen_values = true)]
        min: Vec3A,

        /// Box max corner as X,Y,Z
        #[arg(long, value_parser = parse_vec3a, allow_hyphen_values = true)]
        max: Vec3A,

        /// Smallest ray parameter accepted for the clipped hit
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        t_min: f32,
    },
}

/// Camera placement and image-plane point shared by both projections
#[derive(clap::Args, Debug)]
pub struct ViewArgs {
    /// Camera position as X,Y,Z
    #[arg(long, value_parser = parse_vec3a, allow_hyphen_values = true)]
    pub from: Vec3A,

    /// Point the camera looks at as X,Y,Z
    #[arg(long, value_parser = parse_vec3a, allow_hyphen_values = true)]
    pub at: Vec3A,

    /// Camera-relative up hint as X,Y,Z
    #[arg(long, value_parser = parse_vec3a, default_value = "0,1,0", allow_hyphen_values = true)]
    pub up: Vec3A,

    /// Image width over height. Derived from --width/--height when omitted
    #[arg(long)]
    pub aspect: Option<f32>,

    /// Image-plane point in normalized device coordinates as X,Y
    #[arg(long, value_parser = parse_vec2, allow_hyphen_values = true, conflicts_with = "pixel")]
    pub ndc: Option<Vec2>,

    /// Pixel column and row as I,J (needs --width and --height)
    #[arg(long, value_parser = parse_pixel, requires_all = ["width", "height"])]
    pub pixel: Option<(u32, u32)>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,
}

fn parse_components<const N: usize>(s: &str) -> Result<[f32; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {} comma-separated numbers, got '{}'", N, s));
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f32>()
            .map_err(|e| format!("invalid number '{}': {}", part, e))?;
    }
    Ok(out)
}

/// Parse "x,y,z" into a vector
pub fn parse_vec3a(s: &str) -> Result<Vec3A, String> {
    parse_components::<3>(s).map(Vec3A::from_array)
}

/// Parse "x,y" into a vector
pub fn parse_vec2(s: &str) -> Result<Vec2, String> {
    parse_components::<2>(s).map(Vec2::from_array)
}

/// Parse "i,j" pixel coordinates
pub fn parse_pixel(s: &str) -> Result<(u32, u32), String> {
    let (i, j) = s
        .split_once(',')
        .ok_or_else(|| format!("expected I,J pixel coordinates, got '{}'", s))?;
    let i = i.trim().parse::<u32>().map_err(|e| format!("invalid column '{}': {}", i, e))?;
    let j = j.trim().parse::<u32>().map_err(|e| format!("invalid row '{}': {}", j, e))?;
    Ok((i, j))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vec3a() {
        assert_eq!(parse_vec3a("1,-2.5, 3").unwrap(), Vec3A::new(1.0, -2.5, 3.0));
        assert!(parse_vec3a("1,2").is_err());
        assert!(parse_vec3a("1,2,z").is_err());
    }

    #[test]
    fn test_parse_vec2_and_pixel() {
        assert_eq!(parse_vec2("-0.5,1").unwrap(), Vec2::new(-0.5, 1.0));
        assert_eq!(parse_pixel("12, 7").unwrap(), (12, 7));
        assert!(parse_pixel("12").is_err());
        assert!(parse_pixel("-1,3").is_err());
    }

    #[test]
    fn test_hit_command_parses_negative_vectors() {
        let args = Args::try_parse_from([
            "eyeray", "hit", "--origin", "0,0,-5", "--direction", "0,0,1", "--min", "-1,-1,-1",
            "--max", "1,1,1",
        ])
        .unwrap();
        match args.command {
            Command::Hit { origin, min, t_min, .. } => {
                assert_eq!(origin, Vec3A::new(0.0, 0.0, -5.0));
                assert_eq!(min, Vec3A::splat(-1.0));
                assert_eq!(t_min, 0.0);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_pixel_requires_image_size() {
        let result = Args::try_parse_from([
            "eyeray", "persp", "--from", "0,0,5", "--at", "0,0,0", "--pixel", "3,4",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_ndc_conflicts_with_pixel() {
        let result = Args::try_parse_from([
            "eyeray", "ortho", "--from", "0,0,5", "--at", "0,0,0", "--ndc", "0,0", "--pixel", "1,1",
            "--width", "4", "--height", "4",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_level_maps_to_level_filter() {
        let args = Args::try_parse_from([
            "eyeray", "hit", "--origin", "0,0,0", "--direction", "0,0,1", "--min", "0,0,0",
            "--max", "1,1,1", "--debug-level", "trace",
        ])
        .unwrap();
        assert_eq!(LevelFilter::from(args.debug_level), LevelFilter::Trace);

        let args = Args::try_parse_from(["eyeray", "persp", "--from", "0,0,5", "--at", "0,0,0"]).unwrap();
        assert_eq!(LevelFilter::from(args.debug_level), LevelFilter::Info);
    }

    #[test]
    fn test_persp_defaults() {
        let args = Args::try_parse_from(["eyeray", "persp", "--from", "0,0,5", "--at", "0,0,0"]).unwrap();
        match args.command {
            Command::Persp { view, vfov } => {
                assert_eq!(vfov, 90.0);
                assert_eq!(view.up, Vec3A::Y);
                assert!(view.ndc.is_none());
                assert!(view.aspect.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
