use lapjv::{AssignmentSolver, Lapjv};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Four workers, three jobs: one worker stays idle.
    let costs = vec![
        vec![9.0, 2.0, 7.0],
        vec![6.0, 4.0, 3.0],
        vec![5.0, 8.0, 1.0],
        vec![7.0, 6.0, 9.0],
    ];

    let min = Lapjv::new().solve_rows(&costs)?.ok_or("empty matrix")?;
    println!("minimum cost {}:", min.cost);
    for (worker, job) in min.pairs() {
        println!("  worker {worker} -> job {job} ({})", costs[worker][job]);
    }

    // Same matrix read as profits.
    let max = Lapjv::new()
        .with_maximize(true)
        .solve_rows(&costs)?
        .ok_or("empty matrix")?;
    println!("maximum profit {}:", max.cost);
    for (worker, job) in max.pairs() {
        println!("  worker {worker} -> job {job} ({})", costs[worker][job]);
    }

    Ok(())
}
