//! dockd - manage the applications docked to the launcher strip.

fn main() {
    dockd_lib::logging::init();

    if let Err(err) = dockd_lib::cli::run() {
        eprintln!("dockd: {err}");
        std::process::exit(1);
    }
}
