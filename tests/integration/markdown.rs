use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_markdown_images_and_nested_documents() {
    let project = TestProject::new().unwrap();
    project
        .write_file(
            "guide.md",
            "# Guide\n\n![Overview](img/overview.png \"The big picture\")\n\nSee ![part](parts/setup.markdown) and ![logo](https://example.com/logo.svg).\n",
        )
        .unwrap();
    project.write_file("parts/setup.markdown", "![Screen](img/setup.jpg)\n").unwrap();
    project.touch(&["img/overview.png", "img/setup.jpg"]).unwrap();

    let output = project.run_depgen(&["guide.md"]).unwrap();

    output.assert_success().assert_stdout_contains(
        "guide.pdf: guide.md \\\n\timg/overview.png \\\n\timg/setup.jpg \\\n\tparts/setup.markdown\n\n",
    );
    output.assert_stdout_contains(
        "Makefile.d: Makefile.files \\\n\tguide.md \\\n\tparts/setup.markdown\n\n",
    );
    assert!(!output.stdout.contains("example.com"));
}

#[test]
fn test_markdown_and_latex_batch() {
    let project = TestProject::new().unwrap();
    project.write_file("slides.md", "![diagram](appendix.tex)\n").unwrap();
    project.write_file("appendix.tex", "\\includegraphics{chart}\n").unwrap();
    project.write_file("paper.tex", "\\input{appendix}\n").unwrap();
    project.touch(&["chart.eps"]).unwrap();

    let output = project.run_depgen(&["slides.md", "paper.tex"]).unwrap();

    output
        .assert_success()
        .assert_stdout_contains("slides.pdf: slides.md \\\n\tappendix.tex \\\n\tchart.eps\n\n")
        .assert_stdout_contains("paper.pdf: paper.tex \\\n\tappendix.tex \\\n\tchart.eps\n\n")
        .assert_stdout_contains(
            "Makefile.d: Makefile.files \\\n\tappendix.tex \\\n\tpaper.tex \\\n\tslides.md\n\n",
        );
    let slides = output.stdout.find("# Generated for slides.md").unwrap();
    let paper = output.stdout.find("# Generated for paper.tex").unwrap();
    assert!(slides < paper);
}

#[test]
fn test_markdown_latex_syntax_is_not_scanned() {
    let project = TestProject::new().unwrap();
    project.write_file("notes.md", "Use \\input{chapter} in LaTeX.\n").unwrap();
    project.touch(&["chapter.tex"]).unwrap();

    project
        .command()
        .arg("notes.md")
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.pdf: notes.md\n\n"));
}

#[test]
fn test_markdown_extension_is_case_sensitive() {
    let project = TestProject::new().unwrap();
    project.touch(&["README.MD"]).unwrap();

    project
        .command()
        .arg("README.MD")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unsupported file: README.MD"));
}

#[test]
fn test_titled_references_are_tracked() {
    let project = TestProject::new().unwrap();
    project
        .write_file(
            "report.md",
            "![Bob](img/bob.png \"Bob's figure\")\n![Map](img/map 2.png (Site map))\n",
        )
        .unwrap();
    project.touch(&["img/bob.png", "img/map 2.png"]).unwrap();

    project
        .command()
        .arg("report.md")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "report.pdf: report.md \\\n\timg/bob.png \\\n\timg/map 2.png\n\n",
        ))
        .stderr(predicate::str::contains("File 'img/map 2.png' contains invalid characters"));
}
