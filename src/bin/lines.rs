//! Line-plot gallery: a basic curve, point-styled datasets and a fully
//! styled line.

use std::error::Error;
use mpl_gallery as plt;

fn main() -> Result<(), Box<dyn Error>> {
    // Sample data
    let x = [1., 2., 3., 4., 5.];
    let y = [1., 4., 9., 16., 25.];

    // A basic plot with axis labels and a title.
    let (fig, [[mut ax]]) = plt::subplots()?;
    ax.xy(&x, &y).plot()?;
    ax.set_xlabel("X-axis label")
        .set_ylabel("Y-axis label")
        .set_title("Title of the Plot");
    fig.save().to_file("target/lines_basic.png")?;

    // Two datasets drawn as blue and green points.
    let y1 = [1., 4., 9., 16., 25.];
    let y2 = [1., 2., 3., 4., 5.];
    let (fig, [[mut ax]]) = plt::subplots()?;
    ax.xy(&x, &y1).fmt("bo").label("Dataset 1")
        .xy(&x, &y2).fmt("go").label("Dataset 2")
        .plot()?;
    ax.set_xlabel("X-axis label")
        .set_ylabel("Y-axis label")
        .set_title("Multiple Lines")
        .legend();
    fig.save().to_file("target/lines_points.png")?;

    // A dotted green line with large hexagonal markers.
    let (fig, [[mut ax]]) = plt::subplots()?;
    ax.xy(&x, &y)
        .color("green")
        .marker("H")
        .linestyle(":")
        .linewidth(2.)
        .markersize(12.)
        .plot()?;
    fig.save().to_file("target/lines_styled.png")?;
    // plt::show()?;
    Ok(())
}
