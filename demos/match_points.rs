use lapjv::{assign_points, cost_matrix, Distance};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Frame-to-frame tracking: match last frame's tracks to this frame's detections.
    //
    // Three tracks, four detections. One detection is clutter and stays unmatched.
    let tracks: Vec<Vec<f64>> = vec![vec![0.0, 0.0], vec![5.0, 5.0], vec![10.0, 0.0]];
    let detections: Vec<Vec<f64>> = vec![
        vec![10.3, 0.2],
        vec![30.0, 30.0],
        vec![0.1, -0.2],
        vec![4.8, 5.1],
    ];

    let costs = cost_matrix(&tracks, &detections, Distance::Euclidean)?;
    println!("cost matrix ({}x{}):", costs.nrows(), costs.ncols());
    for row in costs.outer_iter() {
        let cells: Vec<String> = row.iter().map(|c| format!("{c:7.2}")).collect();
        println!("  [{}]", cells.join(" "));
    }

    let Some(assignment) = assign_points(&tracks, &detections, Distance::Euclidean)? else {
        println!("nothing to match");
        return Ok(());
    };

    for (track, detection) in assignment.pairs() {
        println!("  track {track} -> detection {detection}");
    }
    let unmatched: Vec<usize> = (0..detections.len())
        .filter(|&j| assignment.row_for_col(j).is_none())
        .collect();
    println!("unmatched detections: {unmatched:?}");
    println!("total distance: {:.3}", assignment.cost);

    Ok(())
}
