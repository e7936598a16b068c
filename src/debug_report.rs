use maskfmt::{CharClasses, FormatResultVerbose, StepAction, StepTrace};

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

pub fn print_run(res: &FormatResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &res.details;
    println!(
        "\n{}",
        palette.bold(palette.paint(format!("⚙  Mask: \"{}\"  Input: \"{}\"", res.mask, res.input), ansi::CYAN))
    );

    println!("\n{}", palette.paint("━━━ Steps ━━━", ansi::GRAY));
    for step in &details.steps {
        println!("  {}", fmt_step(step, &palette));
    }

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    if res.output.is_empty() {
        println!("{}", palette.dim("  No characters emitted"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        for reason in empty_output_reasons(res) {
            println!("  • {reason}");
        }
        println!("\n{}", palette.dim(format!("  Tip: {}", trace_tip())));
    } else {
        println!("  {}", palette.bold(palette.paint(&res.output, ansi::GREEN)));
    }

    println!("\n{}", palette.paint("━━━ Counters ━━━", ansi::GRAY));
    println!(
        "  consumed: {}  │  skipped: {}  │  passed through: {}  │  synthesized: {}  │  exhausted: {}  │  rewinds: {}",
        palette.paint(details.consumed.to_string(), ansi::GREEN),
        palette.paint(details.skipped.to_string(), ansi::YELLOW),
        palette.paint(details.passed_through.to_string(), ansi::BLUE),
        palette.paint(details.synthesized.to_string(), ansi::CYAN),
        palette.dim(details.exhausted.to_string()),
        palette.dim(details.rewinds.to_string()),
    );

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", details.total), ansi::GREEN));
    println!();
}

fn empty_output_reasons(res: &FormatResultVerbose) -> Vec<String> {
    let details = &res.details;
    if res.input.is_empty() {
        return vec!["Input was empty".to_string()];
    }

    // With input left a literal always emits, so the first placeholder starved.
    if !details.input_classes.intersects(details.mask_classes) {
        vec![format!(
            "Input classes {} share nothing with mask classes {}",
            fmt_classes(details.input_classes),
            fmt_classes(details.mask_classes)
        )]
    } else {
        vec!["Input characters did not match the placeholders in mask order".to_string()]
    }
}

fn trace_tip() -> &'static str {
    if cfg!(feature = "tracing") {
        "Enable a tracing subscriber at debug level to see each step"
    } else {
        "Set MASKFMT_DEBUG_STEPS=1 to trace each step on stderr"
    }
}

fn fmt_step(step: &StepTrace, palette: &ansi::Palette) -> String {
    let action = match step.action {
        StepAction::Consumed => palette.paint("consumed", ansi::GREEN),
        StepAction::PassedThrough => palette.paint("passed through", ansi::BLUE),
        StepAction::Synthesized => palette.paint("synthesized", ansi::CYAN),
        StepAction::Exhausted => palette.dim("exhausted"),
    };

    let mut line = format!(
        "{} {} {}",
        palette.paint(format!("[{:>2}]", step.index), ansi::GRAY),
        palette.paint(format!("{:?}", step.symbol), ansi::BLUE),
        action,
    );

    if let Some(c) = step.emitted {
        line.push_str(&format!(" {}", palette.bold(format!("{c:?}"))));
    }
    if !step.skipped.is_empty() {
        let skipped: String = step.skipped.iter().collect();
        line.push_str(&format!(" {}", palette.paint(format!("skipped {skipped:?}"), ansi::YELLOW)));
    }
    line.push_str(&format!(" {}", palette.dim(format!("@{}", step.position))));
    line
}

fn fmt_classes(classes: CharClasses) -> String {
    if classes.is_empty() {
        return "{}".to_string();
    }
    let names: Vec<&str> = classes.iter_names().map(|(name, _)| name).collect();
    format!("{{{}}}", names.join(", ").to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use maskfmt::{Options, format_verbose_with};

    fn reasons(mask: &str, input: &str) -> Vec<String> {
        empty_output_reasons(&format_verbose_with(mask, input, &Options::default()).unwrap())
    }

    #[test]
    fn every_empty_output_gets_a_reason() {
        assert_eq!(reasons("999", ""), vec!["Input was empty"]);
        assert_eq!(reasons("999", "abc"), vec!["Input classes {letter} share nothing with mask classes {digit}"]);
        assert_eq!(reasons("9A", "a"), vec!["Input characters did not match the placeholders in mask order"]);
    }

    #[test]
    fn tip_names_the_active_trace_channel() {
        let tip = trace_tip();
        if cfg!(feature = "tracing") {
            assert!(tip.contains("tracing"));
        } else {
            assert!(tip.contains("MASKFMT_DEBUG_STEPS"));
        }
    }
}
