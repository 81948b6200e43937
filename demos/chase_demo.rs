//! Demo walking an avatar east along the equator with the chase camera.
//!
//! Run with `RUST_LOG=debug` to see the view lifecycle.

use globe_chase::*;

fn main() -> Result<()> {
    init_logging();

    let mut hooks = FrameHooks::new(ChaseCamera::default());
    let mut view = ChaseView::new(ChaseOptions::default());

    let start = GameSnapshot::new(DVec3::new(6_378_137.0, 0.0, 0.0), 90.0);
    view.initialize([start], &mut hooks)?;

    // Walk 1 m per frame along the equator.
    for step in 0..5 {
        let longitude = f64::from(step) / 6_378_137.0;
        let position = DVec3::new(longitude.cos(), longitude.sin(), 0.0) * 6_378_137.0;
        view.publish(Pose::new("me", position, 90.0))?;

        hooks.prepare_frame();
        let camera = hooks.camera();
        log::info!(
            "frame {}: eye {:.3} looking at {:.3}",
            hooks.frame_count(),
            camera.position(),
            camera.target()
        );
    }

    if let Some(note) = view.notification() {
        println!("{}", serde_json::to_string_pretty(&note)?);
    }

    Ok(())
}
