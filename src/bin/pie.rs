//! Pie-chart gallery: labeled wedges with percentage labels and hatch
//! patterns.

use std::error::Error;
use mpl_gallery as plt;

fn main() -> Result<(), Box<dyn Error>> {
    let labels = ["Frogs", "Hogs", "Dogs", "Logs"];
    let sizes = [10., 20., 30., 40.];

    let (fig, [[mut ax]]) = plt::subplots()?;
    ax.pie(&sizes)
        .labels(&labels)
        .autopct("%1.1f%%")
        .hatches(&["**O", "oO", "O.O", ".||."])
        .draw()?;
    fig.save().to_file("target/pie.png")?;
    Ok(())
}
