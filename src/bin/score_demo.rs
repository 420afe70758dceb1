use circle_scorer::config::scan::load_config;
use circle_scorer::image::{load_rgb_image, save_mask_png, write_json_file};
use circle_scorer::{CircleScorer, ScanError};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let photo = load_rgb_image(&config.input_path)?;
    let square = photo.center_crop_square();
    if square.width() != photo.width() || square.height() != photo.height() {
        println!(
            "Cropped {}x{} photo to {}x{} square",
            photo.width(),
            photo.height(),
            square.width(),
            square.height()
        );
    }

    let mut scorer =
        CircleScorer::new(square.as_view(), config.params).map_err(|e| e.to_string())?;
    match scorer.run_to_completion() {
        Ok(score) => {
            println!("Circle score: {:.1}", score.circle_score);
            println!("Average diameter: {:.2} px", score.average_diameter);
            println!("Average deviation: {:.2} px", score.average_deviation);
        }
        Err(ScanError::PhaseStall { phase }) => {
            println!(
                "Scan stalled in phase {phase:?}: no drawing found at threshold {}.",
                scorer.threshold()
            );
            println!("Retry with a different threshold or a tighter crop.");
        }
        Err(err) => return Err(err.to_string()),
    }

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &scorer.report())?;
        println!("JSON report written to {}", path.display());
    }
    if let Some(path) = &config.output.mask_out {
        save_mask_png(scorer.mask(), path)?;
        println!("Binarized mask written to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: score_demo <config.json>".to_string()
}
