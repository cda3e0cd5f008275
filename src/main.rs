use std::path::Path;

use carousel::frame::{FramePacer, ManualScheduler};
use carousel::input::{PointerBus, PointerEvent};
use carousel::view::RecordingView;
use carousel::{Carousel, CarouselError, CarouselOptions};

/// Frames per second the simulated display refreshes at.
const DISPLAY_FPS: u32 = 60;
/// Pointer events per scripted drag.
const DRAG_STEPS: u32 = 12;

fn load_options(arg: Option<&str>) -> Result<CarouselOptions, CarouselError> {
    match arg {
        Some(path) => CarouselOptions::load(Path::new(path)),
        None => Ok(CarouselOptions::default()),
    }
}

/// Drag from x=0 to `distance` in even steps, then release.
fn scripted_drag(bus: &mut PointerBus, distance: f64) {
    bus.dispatch(PointerEvent::Down { x: 0.0 });
    for step in 1..=DRAG_STEPS {
        let x = distance * f64::from(step) / f64::from(DRAG_STEPS);
        bus.dispatch(PointerEvent::Move { x });
    }
    bus.dispatch(PointerEvent::Up);
}

fn run(
    options: CarouselOptions,
    distance: f64,
) -> Result<(), CarouselError> {
    let mut carousel = Carousel::attach(
        options,
        ManualScheduler::new(),
        RecordingView::new(),
        PointerBus::new(),
    )?;

    scripted_drag(carousel.source_mut(), distance);
    {
        let controller = carousel.controller().borrow();
        log::info!(
            "released at rotation {:.2}, velocity {:.3} deg/frame",
            controller.rotation(),
            controller.velocity()
        );
    }

    let mut pacer = FramePacer::new(DISPLAY_FPS);
    loop {
        std::thread::sleep(pacer.until_next());
        if !carousel.run_due_frame() {
            break;
        }
        let frame = pacer.tick();
        let controller = carousel.controller().borrow();
        log::trace!(
            "frame {frame}: rotation {:.3}, velocity {:.4}",
            controller.rotation(),
            controller.velocity()
        );
    }

    let controller = carousel.controller().borrow();
    log::info!(
        "at rest after {} frames ({:.1} fps): rotation {:.2}, \
         centred item {}, shown items {:?}",
        pacer.frames(),
        pacer.average_fps(),
        controller.rotation(),
        controller.ring().centered_item(&controller.transform()),
        controller.view().shown()
    );
    drop(controller);
    carousel.detach();
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match load_options(args.first().map(String::as_str)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    let distance = match args.get(1).map(|s| s.parse::<f64>()) {
        None => 600.0,
        Some(Ok(d)) if d.is_finite() => d,
        Some(_) => {
            log::error!("Usage: carousel-sim [preset.toml] [drag distance px]");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(options, distance) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
