use thinfilm::output;
use thinfilm::problem::Problem;
use thinfilm::settings::{self};

fn main() -> anyhow::Result<()> {
    let settings = settings::load_config()?;
    println!("{}", settings);

    let problem = Problem::new(settings)?;
    let frame = problem.solve()?;

    let dir = output::writeup(&frame, &problem.settings)?;
    println!("frame written to {}", dir.display());
    Ok(())
}
