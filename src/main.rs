use lissajous::{run_lissajous, LissajousConfig};

fn main() -> eframe::Result<()> {
    run_lissajous(LissajousConfig::default())
}
