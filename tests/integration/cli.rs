use predicates::prelude::*;

use crate::common::{HEADER, TestProject};

#[test]
fn test_full_output_for_single_document() {
    let project = TestProject::new().unwrap();
    project.write_file("doc.tex", "\\input{chapter1}\n\\includegraphics{img/fig}\n").unwrap();
    project.touch(&["chapter1.tex", "img/fig.pdf"]).unwrap();

    let expected = format!(
        "{HEADER}# Generated for doc.tex\n\
         doc.pdf: doc.tex \\\n\tchapter1.tex \\\n\timg/fig.pdf\n\n\
         # Dependencies of this file\n\
         Makefile.d: Makefile.files \\\n\tchapter1.tex \\\n\tdoc.tex\n\n\
         # EOF\n"
    );

    project.command().arg("doc.tex").assert().success().stdout(expected);
}

#[test]
fn test_no_arguments_is_usage_error() {
    let project = TestProject::new().unwrap();

    project.command().assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unsupported_file_warns_and_succeeds() {
    let project = TestProject::new().unwrap();
    project.touch(&["notes.txt", "doc.tex"]).unwrap();

    let output = project.run_depgen(&["notes.txt", "doc.tex"]).unwrap();

    output
        .assert_success()
        .assert_stderr_contains("Unsupported file: notes.txt")
        .assert_stdout_contains("doc.pdf: doc.tex\n\n");
    assert!(!output.stdout.contains("notes"));
}

#[test]
fn test_output_extension_flag() {
    let project = TestProject::new().unwrap();
    project.touch(&["paper.tex"]).unwrap();

    project
        .command()
        .args(["--output-ext", "dvi", "paper.tex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("paper.dvi: paper.tex\n"));
}

#[test]
fn test_degenerate_output_extension() {
    let project = TestProject::new().unwrap();
    project.touch(&["paper.tex"]).unwrap();

    let output = project.run_depgen(&["--output-ext", "tex", "paper.tex"]).unwrap();

    output
        .assert_success()
        .assert_stderr_contains("No dependencies written for paper.tex")
        .assert_stdout_contains("Makefile.d: Makefile.files \\\n\tpaper.tex\n");
    assert!(!output.stdout.contains("# Generated for"));
}

#[test]
fn test_config_file_in_working_directory() {
    let project = TestProject::new().unwrap();
    project
        .write_file(
            "depgen.toml",
            "image_root_directory = \"figures\"\nrule_file_target = \"deps.mk\"\n",
        )
        .unwrap();
    project.write_file("doc.tex", "\\includeimage{logo}\n").unwrap();
    project.touch(&["figures/logo.eps"]).unwrap();

    project
        .command()
        .arg("doc.tex")
        .assert()
        .success()
        .stdout(predicate::str::contains("doc.pdf: doc.tex \\\n\tfigures/logo.eps\n"))
        .stdout(predicate::str::contains("deps.mk: Makefile.files"));
}

#[test]
fn test_invalid_config_fails() {
    let project = TestProject::new().unwrap();
    project.write_file("depgen.toml", "unknown_key = 1\n").unwrap();
    project.touch(&["doc.tex"]).unwrap();

    let output = project.run_depgen(&["doc.tex"]).unwrap();

    output.assert_failure().assert_stderr_contains("depgen.toml");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_explicit_config_fails() {
    let project = TestProject::new().unwrap();
    project.touch(&["doc.tex"]).unwrap();

    project
        .command()
        .args(["--config", "absent.toml", "doc.tex"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("absent.toml"));
}

#[test]
fn test_output_file_is_written() {
    let project = TestProject::new().unwrap();
    project.write_file("doc.tex", "\\bibliography{refs}\n").unwrap();
    project.touch(&["refs.bib"]).unwrap();

    project.command().args(["-o", "Makefile.d", "doc.tex"]).assert().success().stdout("");

    let written = project.read_file("Makefile.d").unwrap();
    assert!(written.starts_with(HEADER));
    assert!(written.contains("doc.pdf: doc.tex \\\n\trefs.bib\n\n"));
    assert!(written.ends_with("# EOF\n"));
}

#[test]
fn test_quiet_hides_warnings() {
    let project = TestProject::new().unwrap();
    project.touch(&["notes.txt"]).unwrap();

    project
        .command()
        .args(["--quiet", "notes.txt"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_logs_scanned_files() {
    let project = TestProject::new().unwrap();
    project.write_file("doc.tex", "\\input{later}\n").unwrap();

    project
        .command()
        .args(["--verbose", "doc.tex"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Scanning LaTeX source doc.tex"))
        .stderr(predicate::str::contains("later.tex does not exist yet"));
}

#[test]
fn test_rust_log_overrides_flags() {
    let project = TestProject::new().unwrap();
    project.touch(&["notes.txt"]).unwrap();

    project
        .command()
        .env("RUST_LOG", "error")
        .arg("notes.txt")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
