//! Subplot gallery: a 2x1 column, a 2x2 grid and a 2x2 grid with
//! shared axes.

use std::error::Error;
use mpl_gallery as plt;

fn main() -> Result<(), Box<dyn Error>> {
    // Two stacked subplots, the first one holding two lines.
    let (fig, [[mut top], [mut bottom]]) = plt::subplots()?;
    top.xy(&[1., 2., 3.], &[1., 4., 9.]).plot()?;
    top.xy(&[1., 2., 3.], &[1., 4., 10.]).plot()?;
    bottom.xy(&[1., 2., 3.], &[1., 2., 3.]).plot()?;
    fig.save().to_file("target/subplots_column.png")?;

    // A 2x2 grid with one line per subplot.
    let (fig, [[mut ax00, mut ax01],
               [mut ax10, mut ax11]]) = plt::subplots()?;
    ax00.xy(&[1., 2., 3.], &[1., 4., 9.]).plot()?;
    ax01.xy(&[1., 2., 3.], &[1., 2., 3.]).plot()?;
    ax10.xy(&[1., 2., 3.], &[9., 4., 1.]).plot()?;
    ax11.xy(&[1., 2., 3.], &[3., 6., 9.]).plot()?;
    fig.save().to_file("target/subplots_grid.png")?;

    // The same grid sharing both ranges, with the top-right subplot
    // hidden.
    let (fig, [[mut ax00, mut ax01],
               [mut ax10, mut ax11]]) = plt::subplots_sharing(true, true)?;
    ax00.xy(&[1., 2., 3.], &[1., 4., 9.]).plot()?;
    ax01.xy(&[1., 2., 3.], &[1., 2., 3.]).plot()?;
    ax10.xy(&[1., 2., 3.], &[9., 4., 1.]).plot()?;
    ax11.xy(&[1., 2., 3.], &[3., 6., 9.]).plot()?;
    fig.tight_layout()?;
    ax01.set_axis_off();
    fig.save().to_file("target/subplots_shared.png")?;
    Ok(())
}
