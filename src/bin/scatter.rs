//! Scatter gallery: labeled datasets, plain colored points and a
//! colormapped cloud with an annotation and a colorbar.

use std::error::Error;
use mpl_gallery as plt;

fn main() -> Result<(), Box<dyn Error>> {
    // Sample data
    let x = [1., 2., 3., 4., 5.];
    let y = [2., 3., 5., 7., 11.];

    let x2 = [1., 2., 3., 4., 5.];
    let y2 = [3., 4., 6., 8., 12.];

    // Two labeled datasets told apart by color.
    let (fig, [[mut ax]]) = plt::subplots()?;
    ax.scatter(&x, &y).color("blue").label("Dataset 1").draw()?;
    ax.scatter(&x2, &y2).color("green").label("Dataset 2").draw()?;
    ax.legend();
    fig.save().to_file("target/scatter_datasets.png")?;

    // All points in red, marker area of 10.
    let (fig, [[mut ax]]) = plt::subplots()?;
    ax.scatter(&x, &y).size(10.).color("red").draw()?;
    fig.save().to_file("target/scatter_red.png")?;

    // Color intensity based on value
    let colors = [20., 10., 30., 40., 50.];
    let (fig, [[mut ax]]) = plt::subplots()?;
    let points = ax.scatter(&x, &y)
        .intensities(&colors)
        .cmap("viridis")
        .alpha(1.)
        .draw()?;
    ax.annotate("First Point", (x[0], y[0]))
        .offset_points(10., 10.)
        .ha("center")
        .draw()?;
    ax.set_title("Scatter Plot Example")
        .set_xlabel("X-axis Label")
        .set_ylabel("Y-axis Label")
        .grid();
    fig.colorbar(&points).label("Color Intensity").draw()?;
    fig.save().dpi(300.).tight_bbox().to_file("scatter_plot.png")?;
    Ok(())
}
