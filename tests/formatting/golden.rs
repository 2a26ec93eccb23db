#[cfg(test)]
mod examples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use yamlet::formatting::*;
    use yamlet::parsing;

    /// Simple diff function to show line-by-line differences
    fn show_diff(original: &str, formatted: &str, file_path: &Path) {
        let original_lines: Vec<&str> = original
            .lines()
            .collect();
        let formatted_lines: Vec<&str> = formatted
            .lines()
            .collect();

        let max_lines = original_lines
            .len()
            .max(formatted_lines.len());

        println!("\nDifferences found in file: {:?}", file_path);
        println!("--- Original");
        println!("+++ Formatted");

        for i in 0..max_lines {
            let orig_line = original_lines
                .get(i)
                .unwrap_or(&"");
            let fmt_line = formatted_lines
                .get(i)
                .unwrap_or(&"");

            if orig_line != fmt_line {
                println!("@@ Line {} @@", i + 1);
                println!("- {}", orig_line);
                println!("+ {}", fmt_line);
            }
        }
    }

    fn collect(dir: &Path) -> Vec<PathBuf> {
        assert!(dir.exists(), "{:?} directory missing", dir);

        let entries = fs::read_dir(dir).expect("Failed to read directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("yaml")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .yaml files found in {:?}", dir);
        files
    }

    /// Golden test for the format command. Files in tests/golden/ are in
    /// canonical form, so formatting them must reproduce them exactly. If
    /// this fails either the formatter is wrong or the golden file needs
    /// reformatting after a deliberate style change.
    #[test]
    fn ensure_identical_output() {
        let files = collect(Path::new("tests/golden"));

        let mut failures = Vec::new();

        for file in &files {
            let original = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let document = parsing::parse(&original)
                .unwrap_or_else(|e| panic!("Failed to parse file {:?}: {:?}", file, e));

            let result = render(&Identity, &document);

            if result != original {
                show_diff(&original, &result, &file);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!("All golden files must format unchanged");
        }
    }

    /// Samples are not in canonical form, but formatting must not change
    /// what they mean.
    #[test]
    fn ensure_samples_survive_formatting() {
        let files = collect(Path::new("tests/samples"));

        for file in &files {
            let original = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let document = parsing::parse(&original)
                .unwrap_or_else(|e| panic!("Failed to parse file {:?}: {:?}", file, e));

            let result = render(&Identity, &document);
            let again = parsing::parse(&result)
                .unwrap_or_else(|e| panic!("Formatted {:?} failed to parse: {:?}", file, e));

            assert_eq!(again, document, "formatting changed {:?}", file);

            // and formatting is stable
            assert_eq!(render(&Identity, &again), result);
        }
    }
}
