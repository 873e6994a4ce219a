use clap::Parser;
use glam::Vec2;
use log::{debug, info};

mod cli;
mod logger;

use cli::{Args, Command, ViewArgs};
use eyeray::{
    Aabb, CameraFrame, Interval, OrthographicCamera, PerspectiveCamera, Projection, Ray,
    pixel_to_ndc, ray_aabb_intersect,
};
use logger::init_logger;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Build the camera frame and image-plane point from the view arguments.
///
/// Returns the frame, the aspect ratio and the NDC point.
fn resolve_view(view: &ViewArgs) -> Result<(CameraFrame, f32, Vec2)> {
    let frame = CameraFrame::look_at(view.from, view.at, view.up);
    if !frame.is_valid() {
        return Err(format!(
            "degenerate camera frame: from {} at {} up {} (camera must not sit on its target, up must not be parallel to the view)",
            view.from, view.at, view.up
        )
        .into());
    }

    let image_size = match (view.width, view.height) {
        (Some(0), _) | (_, Some(0)) => return Err("image width and height must be non-zero".into()),
        (Some(w), Some(h)) => Some((w, h)),
        _ => None,
    };

    let aspect = match (view.aspect, image_size) {
        (Some(a), _) => a,
        (None, Some((w, h))) => w as f32 / h as f32,
        (None, None) => 1.0,
    };
    if !(aspect.is_finite() && aspect > 0.0) {
        return Err(format!("aspect ratio must be positive, got {}", aspect).into());
    }

    let ndc = match (view.ndc, view.pixel, image_size) {
        (Some(ndc), _, _) => ndc,
        (None, Some((i, j)), Some((w, h))) => {
            if i >= w || j >= h {
                return Err(format!("pixel ({}, {}) outside {}x{} image", i, j, w, h).into());
            }
            pixel_to_ndc(i, j, w, h)
        }
        (None, Some(_), None) => return Err("--pixel needs --width and --height".into()),
        (None, None, _) => Vec2::ZERO,
    };

    debug!("Camera frame: {:?}", frame);
    debug!("Aspect {}, NDC {}", aspect, ndc);
    Ok((frame, aspect, ndc))
}

fn print_ray(projection: &str, ndc: Vec2, r: &Ray) {
    println!("projection: {}", projection);
    println!("ndc:        {}", ndc);
    println!("origin:     {}", r.origin);
    println!("direction:  {}", r.direction);
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Persp { view, vfov } => {
            if !(vfov > 0.0 && vfov < 180.0) {
                return Err(format!("vertical field of view must be in (0, 180) degrees, got {}", vfov).into());
            }
            let (frame, aspect, ndc) = resolve_view(&view)?;
            let perspective = PerspectiveCamera::new(frame, vfov, aspect);
            debug!("Camera-to-world: {:?}", perspective.transform());
            let camera = Projection::Perspective(perspective);
            info!("Perspective camera, vfov {} deg", vfov);
            print_ray("perspective", ndc, &camera.eye_ray(ndc));
        }
        Command::Ortho { view, half_height } => {
            if !(half_height > 0.0) {
                return Err(format!("half height must be positive, got {}", half_height).into());
            }
            let (frame, aspect, ndc) = resolve_view(&view)?;
            let camera = Projection::Orthographic(OrthographicCamera::new(frame, half_height, aspect));
            info!("Orthographic camera, half height {}", half_height);
            print_ray("orthographic", ndc, &camera.eye_ray(ndc));
        }
        Command::Hit { origin, direction, min, max, t_min } => {
            let r = Ray::new(origin, direction);
            debug!("Ray {:?} against box [{}, {}]", r, min, max);

            let mut t_near = 0.0;
            let mut t_far = 0.0;
            let hit = ray_aabb_intersect(&r, min, max, &mut t_near, &mut t_far);
            println!("hit:        {}", hit);
            println!("t_near:     {}", t_near);
            println!("t_far:      {}", t_far);

            let aabb = Aabb::new(min, max);
            println!("inside:     {}", aabb.origin_inside(&r));

            // Forward-only view of the same test
            let forward = aabb.hit(&r, Interval::new(t_min, f32::INFINITY));
            match forward {
                Some(span) => {
                    println!("clipped:    [{}, {}]", span.min, span.max);
                    println!("entry:      {}", r.at(span.min));
                }
                None => println!("clipped:    none"),
            }
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    info!("eyeray - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if let Err(e) = run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
