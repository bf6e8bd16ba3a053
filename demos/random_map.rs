use clap::Parser;
use grid_astar::{
    generate_random_map, random_free_point, render_ascii, render_image, AstarSolver, Components,
    GridMap, GridSolver, SolverConfig,
};
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;
use std::time::Instant;

/// Generates a random occupancy map, runs two A* searches on it and prints the map with both paths.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(long, default_value_t = 100)]
    width: usize,

    #[arg(long, default_value_t = 100)]
    height: usize,

    /// Probability of each cell being an obstacle
    #[arg(long, default_value_t = 0.25)]
    obstacle_prob: f64,

    /// Seed for the map and the second query; random when absent
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with solver settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also writes the map and both paths to this PNG file
    #[arg(long)]
    png: Option<PathBuf>,

    /// Side length of a cell in the PNG, in pixels
    #[arg(long, default_value_t = 8)]
    cell_size: u32,
}

fn main() -> grid_astar::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SolverConfig::load(path)?,
        None => SolverConfig::default(),
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let grid = generate_random_map(args.width, args.height, args.obstacle_prob, &mut rng)?;
    print!("{}", grid);

    let solver = AstarSolver::with_config(config);
    let components = Components::generate(&grid);

    let timer = Instant::now();
    let first = solver.find_path(&grid)?;
    println!("A* took {:?}.", timer.elapsed());
    if first.is_empty() {
        println!("No path found for the first goal!");
    } else {
        println!("First path found with {} steps.", first.len());
    }
    info!(
        "First goal reachable by components: {}",
        components.reachable(&grid.start(), &grid.goal())
    );

    let mut paths = vec![first];
    if let Some(start) = random_free_point(&grid, &mut rng, &[]) {
        if let Some(goal) = random_free_point(&grid, &mut rng, &[start]) {
            let timer = Instant::now();
            let second = solver.find_path_between(&grid, start, goal)?;
            println!("A* took {:?}.", timer.elapsed());
            if second.is_empty() {
                println!("No path found for the second goal!");
            } else {
                println!("Second path found with {} steps.", second.len());
            }
            info!(
                "Second query from {} to {}, reachable by components: {}",
                start,
                goal,
                components.reachable(&start, &goal)
            );
            paths.push(second);
        }
    }

    print!("{}", render_ascii(&grid, &paths));
    if let Some(png) = &args.png {
        render_image(&grid, &paths, args.cell_size).save(png)?;
        info!("Wrote {}", png.display());
    }
    Ok(())
}
