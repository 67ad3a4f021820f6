use std::{
    env,
    path::{Path, PathBuf},
};

use argh::FromArgs;

#[derive(FromArgs, PartialEq, Debug)]
/// Developer automation for the rpsl workspace.
struct Args {
    #[argh(subcommand)]
    subcommand: SubCommand,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
enum SubCommand {
    Coverage(CoverageArgs),
    ContinuousIntegration(CIArgs),
    Fuzz(FuzzArgs),
}

#[derive(FromArgs, PartialEq, Debug)]
/// Collect test coverage of the lexer with grcov.
#[argh(subcommand, name = "cov")]
struct CoverageArgs {
    #[argh(switch)]
    /// produce an html report instead of the default .lcov file.
    report: bool,
}

#[derive(FromArgs, PartialEq, Debug)]
/// Check formatting and lints, run the tests, then lex every fixture with rpslc.
#[argh(subcommand, name = "ci")]
struct CIArgs {
    #[argh(switch)]
    /// attempt to automatically fix format and clippy errors.
    fix: bool,
}

#[derive(FromArgs, PartialEq, Debug)]
/// Run one of the lexer fuzz targets with cargo-fuzz.
#[argh(subcommand, name = "fuzz")]
struct FuzzArgs {
    #[argh(positional, default = "String::from(\"lex\")")]
    /// fuzz target to run, either `lex` or `tokenized_buffer`.
    target: String,

    #[argh(option, default = "60")]
    /// seconds to fuzz for before stopping.
    seconds: u32,
}

type DynError = Box<dyn std::error::Error>;

const FUZZ_TARGETS: [&str; 2] = ["lex", "tokenized_buffer"];

/// Source paths left out of coverage reports.
const COVERAGE_IGNORES: [&str; 7] = [
    // outside the workspace, or system libraries
    "../*",
    "/*",
    "xtask/*",
    // test code always runs in a test build
    "lang/tests/*",
    "*_unittests.rs",
    // binaries and fuzz targets are not exercised by cargo test
    "lang/src/bin/*",
    "fuzz/*",
];

/// Fixtures `rpslc` must reject. Every other fixture must lex cleanly.
const MALFORMED_FIXTURES: [&str; 2] = ["malformed.rpsl", "invalid-utf8.rpsl"];

fn main() -> Result<(), DynError> {
    let args: Args = argh::from_env();
    match args.subcommand {
        SubCommand::Coverage(cov_args) => coverage(cov_args.report),
        SubCommand::ContinuousIntegration(ci_args) => ci(ci_args.fix),
        SubCommand::Fuzz(fuzz_args) => fuzz(&fuzz_args.target, fuzz_args.seconds),
    }
}

/// Runs `cargo` with `args` from the workspace root.
fn cargo_step(description: &str, args: &[&str]) -> Result<(), DynError> {
    println!("** {} with `cargo {}`", description, args.join(" "));
    duct::cmd(cargo(), args).dir(project_root()).run()?;
    Ok(())
}

fn coverage(report: bool) -> Result<(), DynError> {
    let root = project_root();
    let cov_path = root.join("target").join("coverage");
    fs_extra::dir::create_all(&cov_path, true)?;

    println!("** collecting coverage information.");
    duct::cmd!(cargo(), "test", "--tests")
        .dir(&root)
        .env("CARGO_INCREMENTAL", "0")
        .env("RUSTFLAGS", "-C instrument-coverage")
        .env("LLVM_PROFILE_FILE", "cargo-test-%p-%m.profraw")
        .run()?;

    println!("** collating coverage data.");
    let (output_format, output_path) = if report {
        ("html", cov_path.join("html"))
    } else {
        ("lcov", cov_path.join("tests.lcov"))
    };
    let mut grcov_args: Vec<String> = vec![
        ".".into(),
        "--binary-path".into(),
        root.join("target").join("debug").join("deps").display().to_string(),
        "-s".into(),
        ".".into(),
        "-t".into(),
        output_format.into(),
        "--branch".into(),
        "--ignore-not-existing".into(),
    ];
    for pattern in COVERAGE_IGNORES {
        grcov_args.push("--ignore".into());
        grcov_args.push(pattern.into());
    }
    grcov_args.push("-o".into());
    grcov_args.push(output_path.display().to_string());
    duct::cmd("grcov", &grcov_args).dir(&root).run()?;

    println!("** cleaning up *.profraw files.");
    let pattern = root.join("**").join("*.profraw");
    for profraw in glob::glob(&pattern.to_string_lossy())? {
        fs_extra::file::remove(profraw?)?;
    }

    println!("** done. Coverage written to {}", output_path.display());
    Ok(())
}

fn ci(fix: bool) -> Result<(), DynError> {
    if fix {
        cargo_step("fixing code formatting", &["fmt", "--all"])?;
        cargo_step("fixing clippy issues", &["clippy", "--fix"])?;
    } else {
        cargo_step("checking code formatting", &["fmt", "--all", "--", "--check"])?;
        cargo_step("linting code", &["clippy", "--", "--deny", "clippy::all"])?;
    }

    println!("** building and testing code with `RUSTFLAGS=\"-D warnings\" cargo test`");
    duct::cmd!(cargo(), "test").dir(project_root()).env("RUSTFLAGS", "-D warnings").run()?;

    lex_fixtures()?;

    println!("** all checks passed!");
    Ok(())
}

/// Runs `rpslc --quiet` over every fixture, checking it accepts exactly the well-formed ones.
fn lex_fixtures() -> Result<(), DynError> {
    let root = project_root();
    let pattern = root.join("lang").join("tests").join("data").join("*.rpsl");
    for fixture in glob::glob(&pattern.to_string_lossy())? {
        let fixture = fixture?;
        let name = fixture.file_name().map(|name| name.to_string_lossy().into_owned());
        let expect_success = !name.as_deref().is_some_and(|n| MALFORMED_FIXTURES.contains(&n));

        let rpslc = ["run", "--quiet", "--bin", "rpslc", "--", "--quiet"];
        let args = rpslc.into_iter().map(PathBuf::from).chain([fixture.clone()]);
        let output = duct::cmd(cargo(), args)
            .dir(&root)
            .stderr_null()
            .unchecked()
            .run()?;
        let verdict = if output.status.success() { "lexed" } else { "rejected" };
        if output.status.success() != expect_success {
            return Err(format!("rpslc unexpectedly {} {}", verdict, fixture.display()).into());
        }
        println!("** rpslc {} {}", verdict, fixture.display());
    }
    Ok(())
}

fn fuzz(target: &str, seconds: u32) -> Result<(), DynError> {
    if !FUZZ_TARGETS.contains(&target) {
        let message = format!("unknown fuzz target {}, expected one of {:?}", target, FUZZ_TARGETS);
        return Err(message.into());
    }

    println!("** fuzzing `{}` for {} seconds with `cargo +nightly fuzz run`", target, seconds);
    // The toolchain override needs the rustup proxy rather than the cargo running this task.
    duct::cmd!(
        "cargo",
        "+nightly",
        "fuzz",
        "run",
        target,
        "--",
        format!("-max_total_time={}", seconds),
    )
    .dir(project_root())
    .run()?;

    println!("** no crashes found.");
    Ok(())
}

fn project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.parent().unwrap_or(manifest_dir).to_path_buf()
}

fn cargo() -> String {
    env::var("CARGO").unwrap_or_else(|_| "cargo".to_string())
}
