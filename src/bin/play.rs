//! Headless vignette player: drives a scripted scene and prints frames.
//!
//! Usage: cargo run --release --bin play -- [OPTIONS]
//!
//! Options:
//!   --scene <NAME>     Vignette to play: chase, fable, cube (default: chase)
//!   --duration <SECS>  Playback length (default: the vignette's run time)
//!   --fps <FPS>        Simulated tick rate (default: 60)
//!   --sample <SECS>    Interval between printed frames (default: 0.5)
//!   --clicks <CSV>     Click times in seconds, e.g. "1.5,4.0" (cube)
//!   --realtime         Pace ticks against the wall clock
//!   --json             Print sampled frames as JSON instead of text

use std::time::Duration;

use serde_json::json;

use vignette::core::time::FrameTimer;
use vignette::scene::{ActorId, Scene};
use vignette::vignettes;

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_millis()
    .init();

    let args: Vec<String> = std::env::args().collect();
    let name = parse_str_arg(&args, "--scene").unwrap_or_else(|| "chase".to_string());
    let fps = parse_f32_arg(&args, "--fps").unwrap_or(60.0).max(1.0);
    let sample = parse_f32_arg(&args, "--sample").unwrap_or(0.5).max(0.01);
    let realtime = has_flag(&args, "--realtime");
    let as_json = has_flag(&args, "--json");

    let Some(script) = vignettes::by_name(&name) else {
        eprintln!("unknown scene '{}'; available: {}", name, vignettes::NAMES.join(", "));
        std::process::exit(1);
    };
    let duration = parse_f32_arg(&args, "--duration")
        .or_else(|| vignettes::suggested_duration_secs(&name))
        .unwrap_or(12.0);

    let mut scene = Scene::build(script).expect("shipped vignette failed validation");

    let mut clicks: Vec<f32> = parse_str_arg(&args, "--clicks")
        .map(|csv| csv.split(',').filter_map(|s| s.trim().parse().ok()).collect())
        .unwrap_or_default();
    clicks.sort_by(f32::total_cmp);
    let click_target = clickable_actor(&scene);
    if !clicks.is_empty() && click_target.is_none() {
        eprintln!("--clicks given but '{}' has nothing clickable", name);
    }

    println!("=== Vignette Player ===");
    println!("Scene:    {}", scene.name());
    println!("Duration: {:.1}s at {} fps", duration, fps);
    println!("Sample:   every {:.2}s", sample);
    println!("Mode:     {}", if realtime { "realtime" } else { "fast" });
    println!();

    let dt = 1.0 / fps;
    let mut timer = FrameTimer::new();
    let mut next_sample = 0.0;
    let mut click_idx = 0;

    print_sample(&scene, as_json);
    next_sample += sample;

    while scene.elapsed() < duration {
        if realtime {
            std::thread::sleep(Duration::from_secs_f32(dt));
            timer.tick();
            scene.advance(timer.delta_secs());
        } else {
            scene.advance(dt);
        }

        if let Some(target) = click_target {
            while click_idx < clicks.len() && clicks[click_idx] <= scene.elapsed() {
                scene.notify_click(target);
                click_idx += 1;
            }
        }

        if scene.elapsed() >= next_sample - 1e-6 {
            print_sample(&scene, as_json);
            next_sample += sample;
        }
    }

    println!();
    println!("=== Playback Complete ===");
    println!("Ticks:  {}", scene.ticks());
    println!("Cues:   {} fired, {} pending", scene.cues_fired(), scene.cues_pending());
    if realtime {
        println!("FPS:    {:.1} measured", timer.fps());
    }
}

/// First clickable actor in the scene, if any.
fn clickable_actor(scene: &Scene) -> Option<ActorId> {
    scene
        .actors()
        .iter()
        .find(|a| a.is_interactive())
        .and_then(|a| scene.actor_id(a.name()))
}

fn print_sample(scene: &Scene, as_json: bool) {
    let frame = scene.frame();
    if as_json {
        let line = json!({ "elapsed": scene.elapsed(), "frame": frame });
        println!("{}", line);
        return;
    }

    let cards: Vec<&str> = frame.overlays.iter().map(|o| o.text.as_str()).collect();
    let cam = frame.camera.position;
    println!(
        "t={:6.2}s  camera ({:.2}, {:.2}, {:.2})  {}",
        scene.elapsed(),
        cam.x,
        cam.y,
        cam.z,
        if cards.is_empty() { String::new() } else { format!("{:?}", cards) },
    );
    for actor in scene.actors() {
        let pos = actor.position();
        println!(
            "    {:<10} step {}  ({:6.2}, {:6.2}, {:6.2})",
            actor.name(),
            actor.step(),
            pos.x,
            pos.y,
            pos.z,
        );
    }
}

fn parse_f32_arg(args: &[String], flag: &str) -> Option<f32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.clone())
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}
