use predicates::prelude::*;

use crate::common::TestProject;

#[test]
fn test_nested_includes_and_bibliography() {
    let project = TestProject::new().unwrap();
    project
        .write_file("thesis.tex", "\\documentclass[a4paper]{thesis}\n\\include{chapters/intro}\n")
        .unwrap();
    project
        .write_file("chapters/intro.tex", "\\input{chapters/background}\n\\bibliography{refs}\n")
        .unwrap();
    project.touch(&["thesis.cls", "chapters/background.tex", "refs.bib"]).unwrap();

    let output = project.run_depgen(&["thesis.tex"]).unwrap();

    output.assert_success().assert_stdout_contains(
        "thesis.pdf: thesis.tex \\\n\tchapters/background.tex \\\n\tchapters/intro.tex \\\n\trefs.bib \\\n\tthesis.cls\n\n",
    );
    output.assert_stdout_contains(
        "Makefile.d: Makefile.files \\\n\tchapters/background.tex \\\n\tchapters/intro.tex \\\n\trefs.bib \\\n\tthesis.cls \\\n\tthesis.tex\n\n",
    );
}

#[test]
fn test_system_packages_are_skipped() {
    let project = TestProject::new().unwrap();
    project.write_file("doc.tex", "\\documentclass{article}\n\\usepackage[utf8]{inputenc}\n").unwrap();

    project
        .command()
        .arg("doc.tex")
        .assert()
        .success()
        .stdout(predicate::str::contains("doc.pdf: doc.tex\n\n"))
        .stderr(predicate::str::contains("documentclass 'article' not found, skipped"))
        .stderr(predicate::str::contains("usepackage 'inputenc' not found, skipped"));
}

#[test]
fn test_local_package_is_tracked_in_rule() {
    let project = TestProject::new().unwrap();
    project.write_file("doc.tex", "\\usepackage{mystyle}\n").unwrap();
    project.touch(&["mystyle.sty"]).unwrap();

    project
        .command()
        .arg("doc.tex")
        .assert()
        .success()
        .stdout(predicate::str::contains("doc.pdf: doc.tex \\\n\tmystyle.sty\n"));
}

#[test]
fn test_image_probing_priority() {
    let project = TestProject::new().unwrap();
    project.write_file("doc.tex", "\\includegraphics[width=5cm]{plot}\n\\includegraphics{photo}\n").unwrap();
    project.touch(&["plot.png", "plot.pdf", "photo.jpg"]).unwrap();

    project
        .command()
        .arg("doc.tex")
        .assert()
        .success()
        .stdout(predicate::str::contains("doc.pdf: doc.tex \\\n\tphoto.jpg \\\n\tplot.pdf\n"));
}

#[test]
fn test_missing_image_gets_default_extension() {
    let project = TestProject::new().unwrap();
    project.write_file("doc.tex", "\\includegraphics{generated/chart}\n").unwrap();

    project
        .command()
        .arg("doc.tex")
        .assert()
        .success()
        .stdout(predicate::str::contains("\tgenerated/chart.pdf\n"));
}

#[test]
fn test_listings_and_minted() {
    let project = TestProject::new().unwrap();
    project
        .write_file(
            "doc.tex",
            "\\lstinputlisting[language=Java]{code/Hello}\n\\inputminted{python}{code/run.py}\n",
        )
        .unwrap();
    project.touch(&["code/Hello.java", "code/run.py"]).unwrap();

    project
        .command()
        .arg("doc.tex")
        .assert()
        .success()
        .stdout(predicate::str::contains("doc.pdf: doc.tex \\\n\tcode/Hello.java \\\n\tcode/run.py\n"));
}

#[test]
fn test_comments_and_macro_arguments_ignored() {
    let project = TestProject::new().unwrap();
    project
        .write_file(
            "doc.tex",
            "%\\input{disabled}\n\\newcommand{\\chap}[1]{\\input{#1}}\n\\input{\\jobname-extra}\n\\input{real} % \\input{also-disabled}\n",
        )
        .unwrap();
    project.touch(&["disabled.tex", "also-disabled.tex", "real.tex"]).unwrap();

    let output = project.run_depgen(&["doc.tex"]).unwrap();

    output.assert_success().assert_stdout_contains("doc.pdf: doc.tex \\\n\treal.tex\n\n");
    assert!(!output.stdout.contains("disabled"));
    assert!(!output.stdout.contains("jobname"));
}

#[test]
fn test_include_cycle_terminates() {
    let project = TestProject::new().unwrap();
    project.write_file("a.tex", "\\input{b}\n").unwrap();
    project.write_file("b.tex", "\\input{a}\n").unwrap();

    project
        .command()
        .arg("a.tex")
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .success()
        .stdout(predicate::str::contains("a.pdf: a.tex \\\n\ta.tex \\\n\tb.tex\n"));
}

#[test]
fn test_path_with_space_is_reported() {
    let project = TestProject::new().unwrap();
    project.write_file("doc.tex", "\\input{my chapter}\n").unwrap();
    project.touch(&["my chapter.tex"]).unwrap();

    project
        .command()
        .arg("doc.tex")
        .assert()
        .success()
        .stdout(predicate::str::contains("\tmy chapter.tex"))
        .stderr(predicate::str::contains("File 'my chapter.tex' contains invalid characters"));
}

#[test]
fn test_missing_top_level_document() {
    let project = TestProject::new().unwrap();

    project
        .command()
        .arg("ghost.tex")
        .assert()
        .success()
        .stdout(predicate::str::contains("ghost.pdf: ghost.tex\n\n"))
        .stderr(predicate::str::contains("ghost.tex: file does not exist"));
}

#[test]
fn test_directory_is_not_a_probe_match() {
    let project = TestProject::new().unwrap();
    project.write_file("doc.tex", "\\input{part}\n").unwrap();
    std::fs::create_dir_all(project.path().join("part.tex")).unwrap();
    project.write_file("part", "").unwrap();

    project.command().arg("doc.tex").assert().success().stdout(predicate::str::contains("\tpart\n"));
}
