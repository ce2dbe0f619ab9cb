use sirensdf::prelude::*;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        println!("Example usage: siren_bvh res/sdf1_arch.txt res/sdf1_test.bin res/sdf1_weights.bin");
        return ExitCode::FAILURE;
    }

    match run(&args[1], &args[2], &args[3]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(
    arch_path: &str,
    test_path: &str,
    weight_path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let architecture = SirenArchitecture::from_file(arch_path)?;
    let test_set = SdfTestSet::from_file(test_path)?;
    let model = Siren::from_file(weight_path, &architecture)?;

    println!("Error: {}", mean_distance_error(&model, &test_set));

    // Feed the acceleration-structure builder. No engine backend is wired up
    // here, so the artifact is handed to the recording stand-in.
    let mut builder = NoopBuilder::default();
    build_with(
        &model,
        &GridParams::default(),
        &mut builder,
        &BuilderConfig::default(),
    )?;

    Ok(())
}
