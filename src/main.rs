use circle_scorer::image::ImageRgb8;
use circle_scorer::{CircleScorer, ScorerParams};

fn main() {
    // Demo stub: scores a synthetic all-black square buffer
    let w = 101usize;
    let rgb = vec![0u8; w * w * 3];
    let img = ImageRgb8 {
        w,
        h: w,
        stride: w,
        data: &rgb,
    };

    let mut scorer = match CircleScorer::new(img, ScorerParams::default()) {
        Ok(scorer) => scorer,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    match scorer.run_to_completion() {
        Ok(score) => println!(
            "score={:.1} avg_diameter={:.1}",
            score.circle_score, score.average_diameter
        ),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
