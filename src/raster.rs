use std::path::Path;
use std::time::Instant;

use clap::ArgMatches;
use tracing::info;

use shapes::icons;
use shapes::{Drawing, Language, HOME_TEXT_SIZE, TEXT_SCALE};

pub fn drawing_for_icon(name: &str) -> Option<Drawing> {
    let drawing = match name {
        "figure" => icons::figure(),
        "repo" => icons::repo(),
        "envelope" => icons::envelope(),
        "rust" => icons::logo(Language::Rust),
        "python" => icons::logo(Language::Python),
        "javascript" => icons::logo(Language::Javascript),
        "cpp" => icons::logo(Language::Cpp),
        _ => return None,
    };

    Some(drawing)
}

pub fn main_raster(args: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let out = Path::new(args.value_of("out").unwrap_or("raster.png"));

    let drawing = match (args.value_of("text"), args.value_of("icon")) {
        (Some(text), _) => {
            let size = match args.value_of("size") {
                Some(v) => v.parse::<f32>()?,
                None => HOME_TEXT_SIZE,
            };
            Drawing::text(text, size, TEXT_SCALE)
        }
        (None, Some(icon)) => drawing_for_icon(icon).ok_or_else(|| format!("unknown icon `{}`", icon))?,
        (None, None) => return Err("either --text or --icon is required".into()),
    };

    let now = Instant::now();
    let raster = drawing.rasterize();
    raster.save(out)?;

    info!(
        path = %out.display(),
        lit = raster.lit_pixels(),
        points = drawing.sample().len(),
        elapsed_ms = now.elapsed().as_millis() as u64,
        "raster written"
    );

    Ok(())
}
