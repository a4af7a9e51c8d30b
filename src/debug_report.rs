use polytonic::{ConversionVerbose, StageSummary};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(res: &ConversionVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &res.details;
    println!(
        "\n{}",
        palette.bold(palette.paint(format!("⚙  Converting {} → {}: \"{}\"", details.from, details.to, res.text), ansi::CYAN))
    );

    println!("\n{}", palette.paint("━━━ Maps ━━━", ansi::GRAY));
    for (leg, (letters, diacritics)) in details.letter_rules.iter().zip(&details.diacritic_rules).enumerate() {
        println!(
            "  {} {} letters  {} {} diacritics",
            palette.paint(format!("Map {leg}:"), ansi::BLUE),
            palette.paint(letters.to_string(), ansi::YELLOW),
            palette.dim("│"),
            palette.paint(diacritics.to_string(), ansi::YELLOW),
        );
    }

    println!("\n{}", palette.paint("━━━ Stages ━━━", ansi::GRAY));
    let mut previous = res.text.as_str();
    for stage in &details.stages {
        println!("  {}", fmt_stage(stage, stage.text != previous, &palette));
        previous = &stage.text;
    }

    println!("\n{}", palette.paint("━━━ Output ━━━", ansi::GRAY));
    println!("  {}", palette.bold(palette.paint(&res.output, ansi::GREEN)));

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", details.total), ansi::GREEN));
    println!();
}

fn fmt_stage(stage: &StageSummary, changed: bool, palette: &ansi::Palette) -> String {
    let marker = if changed { palette.paint("✓", ansi::GREEN) } else { palette.dim("·") };
    let preview: String = stage.text.chars().take(80).collect();
    format!(
        "{} {:<34} {} {}",
        marker,
        palette.paint(&stage.stage, ansi::BLUE),
        palette.dim(format!("{:>10?}", stage.duration)),
        if changed { preview } else { palette.dim(preview) }
    )
}
