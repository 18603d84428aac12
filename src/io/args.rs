// Copyright @yucwang 2026

use std::path::PathBuf;

use console::style;

/// Command-line flags shared by the binaries. Flags a binary doesn't use are
/// parsed and ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonArgs {
    pub config: Option<PathBuf>,
    pub points: Option<PathBuf>,
    pub keys: String,
    pub output: Option<PathBuf>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub resolution: Option<u32>,
    pub seed: Option<u64>,
    pub export_obj: Option<PathBuf>,
    pub object: Option<PathBuf>,
    pub clicks: Vec<(usize, usize)>,
    pub help: bool,
}

impl CommonArgs {
    /// Parses `args` without the program name.
    pub fn parse(args: &[String]) -> Self {
        let mut parsed = Self::default();
        let mut i = 0;
        while i < args.len() {
            let value = args.get(i + 1);
            match args[i].as_str() {
                "--config" => { parsed.config = value.map(PathBuf::from); i += 1; }
                "--points" => { parsed.points = value.map(PathBuf::from); i += 1; }
                "--keys" => {
                    if let Some(v) = value {
                        parsed.keys.push_str(v);
                    }
                    i += 1;
                }
                "--output" => { parsed.output = value.map(PathBuf::from); i += 1; }
                "--width" => { parsed.width = value.and_then(|v| v.parse::<usize>().ok()); i += 1; }
                "--height" => { parsed.height = value.and_then(|v| v.parse::<usize>().ok()); i += 1; }
                "--resolution" => { parsed.resolution = value.and_then(|v| v.parse::<u32>().ok()); i += 1; }
                "--seed" => { parsed.seed = value.and_then(|v| v.parse::<u64>().ok()); i += 1; }
                "--export-obj" => { parsed.export_obj = value.map(PathBuf::from); i += 1; }
                "--object" => { parsed.object = value.map(PathBuf::from); i += 1; }
                "--click" => {
                    match value.and_then(|v| parse_click(v)) {
                        Some(click) => parsed.clicks.push(click),
                        None => log::warn!("Ignoring malformed --click {:?}, expected X,Y.", value),
                    }
                    i += 1;
                }
                "-h" | "--help" => parsed.help = true,
                other => log::warn!("Ignoring unknown argument: {}.", other),
            }
            i += 1;
        }
        parsed
    }
}

/// Flags every binary understands, as `(flag, description)`.
pub const COMMON_FLAGS: [(&str, &str); 7] = [
    ("--config FILE", "XML session file"),
    ("--points FILE", "control-point file"),
    ("--keys SCRIPT", "key presses to apply, <left> <right> <up> <down> <esc> name special keys"),
    ("--output FILE", "render the final frame to a .png or .exr file"),
    ("--width N", "frame width"),
    ("--height N", "frame height"),
    ("-h, --help", "print this help"),
];

pub fn print_usage(program: &str, extra: &[(&str, &str)]) {
    println!("{} {} [options]", style("Usage:").bold(), program);
    for (flag, description) in COMMON_FLAGS.iter().chain(extra.iter()) {
        println!("  {:<20} {}", style(flag).cyan(), description);
    }
}

/// Prints a key binding table.
pub fn print_controls(title: &str, bindings: &[(&str, &str)]) {
    println!("{}", style(title).bold().underlined());
    for (key, action) in bindings {
        println!("  {:<12} {}", style(key).yellow(), action);
    }
}

fn parse_click(value: &str) -> Option<(usize, usize)> {
    let mut parts = value.split(',').map(|s| s.trim());
    let x = parts.next()?.parse::<usize>().ok()?;
    let y = parts.next()?.parse::<usize>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_flags() {
        let parsed = CommonArgs::parse(&args(&["--points", "grid.txt", "--keys", "5l", "--keys", "+",
                                               "--width", "320", "--click", "10,20", "--click", "3,4",
                                               "--output", "frame.png"]));
        assert_eq!(parsed.points, Some(PathBuf::from("grid.txt")));
        assert_eq!(parsed.keys, "5l+");
        assert_eq!(parsed.width, Some(320));
        assert_eq!(parsed.height, None);
        assert_eq!(parsed.clicks, vec![(10, 20), (3, 4)]);
        assert_eq!(parsed.output, Some(PathBuf::from("frame.png")));
    }

    #[test]
    fn test_malformed_values_are_dropped() {
        let parsed = CommonArgs::parse(&args(&["--width", "wide", "--click", "1;2", "--bogus", "--seed"]));
        assert_eq!(parsed.width, None);
        assert!(parsed.clicks.is_empty());
        assert_eq!(parsed.seed, None);
    }
}
