use adi::cli::*;
use adi::domain::*;
use adi::initial_conditions::*;
use adi::solver::*;
use adi::util::*;
use std::io::prelude::*;
use std::process::ExitCode;

fn run<T: FloatTrait>(args: &Args) -> adi::Result<()> {
    let params = args.solver_parameters();
    params.validate()?;

    let mut u = OwnedField::<T>::new(params.aabb(), params.u_layout);
    generate_ic(&mut u, args.ic_type()?, params.chunk_size);
    let mut driver = TimeStepDriver::new(&params)?;

    let start = std::time::Instant::now();
    driver.run(&mut u)?;
    let duration = start.elapsed();

    if !args.quiet {
        let stdout = std::io::stdout();
        let mut output = std::io::BufWriter::new(stdout.lock());
        adi::csv::write_rows(&mut output, &u, " ", Some(2))?;
        output.flush()?;
    }
    eprintln!("{:.6}", duration.as_secs_f64());

    if let Some(path) = &args.csv {
        adi::csv::write_csv(&u, path)?;
    }
    if let Some(path) = &args.image {
        adi::image::image2d(&u, path)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::cli_setup("adi");
    let result = match args.data_type {
        DataType::F32 => run::<f32>(&args),
        DataType::F64 => run::<f64>(&args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("adi: {e}");
            ExitCode::FAILURE
        }
    }
}
