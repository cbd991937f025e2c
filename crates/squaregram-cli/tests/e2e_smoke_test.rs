use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use squaregram::SquaregramError;
use squaregram_cli::{Args, Format};

/// Collects all .toml files from a directory
fn collect_toml_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn demos_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos")
}

fn args_for(input: &Path, format: Format, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        format,
        output: Some(output.to_string_lossy().to_string()),
        config: None,
        special: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let demos = collect_toml_files(demos_dir());
    assert!(!demos.is_empty(), "No demos found in demos/");

    let mut failed = Vec::new();

    for demo in &demos {
        let stem = demo.file_stem().unwrap().to_string_lossy().to_string();

        for (format, extension) in [(Format::Tikz, "tex"), (Format::Svg, "svg")] {
            let output = temp_dir.path().join(format!("{stem}.{extension}"));
            let args = args_for(demo, format, &output);

            match squaregram_cli::run(&args) {
                Ok(()) if output.exists() => {}
                Ok(()) => failed.push((demo.clone(), "no output written".to_string())),
                Err(e) => failed.push((demo.clone(), e.to_string())),
            }
        }
    }

    if !failed.is_empty() {
        eprintln!("\nDemos that failed:");
        for (path, err) in &failed {
            eprintln!("  {}: {}", path.display(), err);
        }
        panic!("{} demo renders failed", failed.len());
    }
}

#[test]
fn e2e_tikz_output_matches_bayes_layout() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("bayes.tex");

    let args = args_for(&demos_dir().join("bayes.toml"), Format::Tikz, &output);
    squaregram_cli::run(&args).expect("Failed to render bayes demo");

    let tikz = fs::read_to_string(&output).expect("Failed to read output");
    let lines: Vec<_> = tikz.lines().collect();

    assert_eq!(lines[0], "\\begin{tikzpicture}[scale=8]");
    assert_eq!(lines[1], "");
    assert_eq!(
        lines[2],
        "\t\\filldraw[draw=black, fill=red!50](0,0) rectangle (0.5,0.092) node[midway] {1};"
    );
    assert_eq!(lines.last(), Some(&"\\end{tikzpicture}"));
    assert_eq!(tikz.matches("\\filldraw").count(), 15);
}

#[test]
fn e2e_special_override_dims_other_labels() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("bayes.tex");

    let mut args = args_for(&demos_dir().join("bayes.toml"), Format::Tikz, &output);
    args.special = Some("3".to_string());
    squaregram_cli::run(&args).expect("Failed to render bayes demo");

    let tikz = fs::read_to_string(&output).expect("Failed to read output");
    assert_eq!(tikz.matches("opacity=0.15").count(), 12);
    assert_eq!(tikz.matches("node[midway] {3};").count(), 3);
}

#[test]
fn e2e_zero_height_cells_are_skipped() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("empty_outcome.tex");

    let args = args_for(&demos_dir().join("empty_outcome.toml"), Format::Tikz, &output);
    squaregram_cli::run(&args).expect("Failed to render demo");

    let tikz = fs::read_to_string(&output).expect("Failed to read output");
    assert_eq!(tikz.matches("\\filldraw").count(), 5);
    assert_eq!(tikz.matches("{edge};").count(), 1);
}

#[test]
fn e2e_svg_output_is_written() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("medical_test.svg");

    let args = args_for(&demos_dir().join("medical_test.toml"), Format::Svg, &output);
    squaregram_cli::run(&args).expect("Failed to render demo");

    let svg = fs::read_to_string(&output).expect("Failed to read output");
    assert!(svg.contains("<svg"));
    assert!(svg.contains("positive"));
    assert_eq!(svg.matches("fill-opacity=\"0.1\"").count(), 2);
}

#[test]
fn e2e_invalid_input_reports_parse_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("broken.toml");
    let output = temp_dir.path().join("broken.tex");
    fs::write(&input, "widths = [0.5, 0.5]\nheights = \"tall\"\n").unwrap();

    let args = args_for(&input, Format::Tikz, &output);
    let err = squaregram_cli::run(&args).unwrap_err();

    assert!(matches!(err, SquaregramError::Parse { span: Some(_), .. }));
    assert!(!output.exists());
}

#[test]
fn e2e_missing_input_reports_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("missing.tex");

    let args = args_for(&temp_dir.path().join("missing.toml"), Format::Tikz, &output);
    let err = squaregram_cli::run(&args).unwrap_err();

    assert!(matches!(err, SquaregramError::Io(_)));
}

#[test]
fn e2e_explicit_config_is_applied() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = temp_dir.path().join("config.toml");
    let output = temp_dir.path().join("bayes.tex");
    fs::write(&config, "[markup]\nscale = 4\ntint = 30\n").unwrap();

    let mut args = args_for(&demos_dir().join("bayes.toml"), Format::Tikz, &output);
    args.config = Some(config.to_string_lossy().to_string());
    squaregram_cli::run(&args).expect("Failed to render bayes demo");

    let tikz = fs::read_to_string(&output).expect("Failed to read output");
    assert!(tikz.starts_with("\\begin{tikzpicture}[scale=4]"));
    assert!(tikz.contains("fill=red!30"));
}
