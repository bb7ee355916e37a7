//! A small gallery of [Matplotlib][] charts driven from [Rust][].
//!
//! Usage
//! -----
//!
//! The crate wraps Matplotlib's explicit interface in a thin typed
//! surface ([`Figure`], [`Axes`] and builder-style draw calls) sized to
//! what the gallery programs in `src/bin/` need: line plots, scatter
//! plots, pie charts and subplot grids, rendered to image files.
//!
//! [Rust]: https://www.rust-lang.org/
//! [Matplotlib]: https://matplotlib.org/

use std::{
    fmt::{Display, Formatter},
    mem::swap,
    path::Path,
};
use lazy_static::lazy_static;
use pyo3::{
    prelude::*,
    intern,
    exceptions::{PyFileNotFoundError, PyPermissionError},
    types::{IntoPyDict, PyDict, PyList},
};
use numpy::{
    PyArray1,
    PyArray2,
};

macro_rules! getattr {
    ($py: ident, $lib: expr, $f: literal) => {
        $lib.getattr($py, intern!($py, $f)).unwrap()
    };
}

macro_rules! meth {
    ($obj: expr, $m: ident, $args: expr) => {
        Python::with_gil(|py| {
            $obj.call_method1(py, intern!(py, stringify!($m)), $args)
        })
    };
}

/// Possible errors of plotting functions.
#[derive(Debug)]
pub enum Error {
    /// The Python library "matplotlib" was not found.
    NoMatplotlib,
    /// Paired data sequences passed to a single draw call have
    /// different lengths.
    LengthMismatch {
        left: usize,
        right: usize,
    },
    /// The path contains an element that is not a directory or does
    /// not exist.
    FileNotFoundError,
    /// Permission denied to access or create the filesystem path.
    PermissionError,
    /// Other Python errors.
    Python(PyErr),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Error::NoMatplotlib =>
                write!(f, "The matplotlib library has not been found.\n\
Please install it.  See https://matplotlib.org/\n\
If you use Anaconda, see https://github.com/PyO3/pyo3/issues/1554"),
            Error::LengthMismatch { left, right } =>
                write!(f, "Paired data sequences have different lengths: \
                           {} versus {}", left, right),
            Error::FileNotFoundError =>
                write!(f, "A path contains an element that is not a \
                           directory or does not exist"),
            Error::PermissionError =>
                write!(f, "Permission denied to access or create the \
                           filesystem path"),
            Error::Python(e) =>
                write!(f, "Python error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

/// Import and return a handle to the module `$m`.
macro_rules! pyimport { ($m: literal) => {
    Python::with_gil(|py|
        PyModule::import(py, intern!(py, $m)).map(|m| m.into()))
}}

lazy_static! {
    // Import matplotlib modules.
    static ref FIGURE: Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.figure")
    };
    static ref PYPLOT: Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.pyplot")
    };
    static ref NUMPY: Result<Numpy, PyErr> = {
        Ok(Numpy {
            numpy: pyimport!("numpy.ctypeslib")?,
            ctypes: pyimport!("ctypes")?,
        })
    };
}

/// Return a handle to the module `$m`.
/// ⚠ This may try to lock Python's GIL.  Make sure it is executed
/// outside a call to `Python::with_gil`.
macro_rules! pymod { ($m: ident) => {
    $m.as_ref().map_err(|_| Error::NoMatplotlib)
}}


/// Represent a "connection" to the `numpy` module to be able to
/// perform copy-free conversions of data.
#[derive(Clone)]
pub struct Numpy {
    numpy: Py<PyModule>,
    ctypes: Py<PyModule>,
}

/// Trait expressing that `Self` can be converted to a numpy.ndarray
/// (without copying).  `Numpy` is a handle to the numpy library.
pub trait Data {
    /// Number of points in the sequence.
    fn len(&self) -> usize;
    fn to_numpy(&self, py: Python, p: &Numpy) -> PyObject;
}

impl<T> Data for T where T: AsRef<[f64]> {
    fn len(&self) -> usize {
        self.as_ref().len()
    }

    fn to_numpy(&self, py: Python, p: &Numpy) -> PyObject {
        let x = self.as_ref();
        // ctypes.POINTER(ctypes.c_double)
        let ty = getattr!(py, p.ctypes, "POINTER")
            .call1(py, (getattr!(py, p.ctypes, "c_double"),)).unwrap();
        // ctypes.cast(x.as_ptr(), ty)
        let ptr = getattr!(py, p.ctypes, "cast")
            .call1(py, (x.as_ptr() as usize, ty)).unwrap();
        // numpy.ctypeslib.as_array(ptr, shape=(x.len(),))
        getattr!(py, p.numpy, "as_array")
            .call1(py, (ptr, (x.len(),))).unwrap()
    }
}

/// A single plotting area inside a [`Figure`].
#[derive(Debug, Clone)]
pub struct Axes {
    ax: PyObject,
}

/// The top level container for all the plot elements.
#[derive(Debug)]
pub struct Figure {
    fig: PyObject, // instance of matplotlib.figure.Figure
}

/// Handle to the lines drawn by [`XY::plot`].
#[derive(Debug)]
pub struct Line2D {
    line2d: Py<PyList>,
}

/// Handle to the points drawn by [`Scatter::draw`].  Feed it to
/// [`Figure::colorbar`] to map its colors onto a scale.
#[derive(Debug)]
pub struct PathCollection {
    pc: PyObject,
}

#[inline(always)]
fn grid<const R: usize, const C: usize, U>(
    f: impl Fn(usize, usize) -> U) -> [[U; C]; R] {
    let mut r = 0;
    [(); R].map(|_| {
        let mut c = 0;
        let row = [(); C].map(|_| {
            let y = f(r, c);
            c += 1;
            y });
        r += 1;
        row })
}

/// Split the Python value returned by `Figure.subplots` into a Rust
/// array of [`Axes`] handles.  Matplotlib returns a bare axes, a 1D
/// array or a 2D array depending on the grid shape.
fn split_axes<const R: usize, const C: usize>(
    py: Python<'_>, axs: PyObject) -> [[Axes; C]; R] {
    if R == 1 && C == 1 {
        grid(|_, _| Axes { ax: axs.clone() })
    } else if R == 1 {
        let axg: &PyArray1<PyObject> = axs.downcast(py).unwrap();
        grid(|_, c| Axes { ax: axg.get_owned(c).unwrap() })
    } else if C == 1 {
        let axg: &PyArray1<PyObject> = axs.downcast(py).unwrap();
        grid(|r, _| Axes { ax: axg.get_owned(r).unwrap() })
    } else {
        let axg: &PyArray2<PyObject> = axs.downcast(py).unwrap();
        grid(|r, c| Axes { ax: axg.get_owned([r, c]).unwrap() })
    }
}

impl Figure {
    /// Return a new `Figure` that is not tracked by pyplot.  Figures
    /// created this way can be saved but not shown.
    pub fn new() -> Result<Figure, Error> {
        let figure = pymod!(FIGURE)?;
        Python::with_gil(|py| {
            let fig = getattr!(py, figure, "Figure")
                .call0(py).unwrap();
            Ok(Self { fig: fig.into() })
        })
    }

    /// Divide the figure into an `R` × `C` grid of [`Axes`].
    ///
    /// Return an error if Matplotlib is not present on the system.
    pub fn subplots<const R: usize, const C: usize>(
        &self) -> Result<[[Axes; C]; R], Error> {
        Python::with_gil(|py| {
            let axs = self.fig
                .call_method1(py, "subplots", (R, C))
                .map_err(Error::Python)?;
            Ok(split_axes::<R, C>(py, axs))
        })
    }

    /// Same as [`Figure::subplots`] but the axes of the grid share
    /// their x range (resp. y range) when `sharex` (resp. `sharey`)
    /// is true.
    pub fn subplots_sharing<const R: usize, const C: usize>(
        &self, sharex: bool, sharey: bool) -> Result<[[Axes; C]; R], Error> {
        Python::with_gil(|py| {
            let kwargs = PyDict::new(py);
            kwargs.set_item("sharex", sharex).unwrap();
            kwargs.set_item("sharey", sharey).unwrap();
            let axs = self.fig
                .call_method(py, intern!(py, "subplots"), (R, C),
                             Some(kwargs))
                .map_err(Error::Python)?;
            Ok(split_axes::<R, C>(py, axs))
        })
    }

    /// Adjust the padding between and around the subplots.
    pub fn tight_layout(&self) -> Result<(), Error> {
        meth!(self.fig, tight_layout, ())
            .map_err(Error::Python)?;
        Ok(())
    }

    /// Add a colorbar for the points of `mappable`, taking its space
    /// from the axes the points were drawn on.
    ///
    /// # Example
    ///
    /// ```
    /// use mpl_gallery as plt;
    /// let (fig, [[mut ax]]) = plt::subplots()?;
    /// let points = ax.scatter(&[1., 2., 3.], &[4., 5., 6.])
    ///     .intensities(&[10., 20., 30.])
    ///     .cmap("viridis")
    ///     .draw()?;
    /// fig.colorbar(&points).label("Intensity").draw()?;
    /// fig.save().to_file("target/doc_colorbar.png")?;
    /// # Ok::<(), mpl_gallery::Error>(())
    /// ```
    pub fn colorbar<'a>(&'a self, mappable: &'a PathCollection)
                        -> Colorbar<'a> {
        Colorbar { fig: self, mappable, label: "" }
    }

    /// If using a GUI backend with pyplot, display the figure window.
    ///
    /// ⚠ [This does not manage a GUI event loop][GUI]. Consequently,
    /// the figure may only be shown briefly or not shown at all if
    /// you or your environment are not managing an event loop.  Use
    /// [`show()`] for that.
    ///
    /// [GUI]: https://matplotlib.org/stable/api/figure_api.html#matplotlib.figure.Figure.show
    pub fn show(self) -> Result<(), Error> {
        Python::with_gil(|py|
            match self.fig.call_method0(py, intern!(py, "show")) {
                Ok(_) => Ok(()),
                Err(e) => Err(Error::Python(e)),
            })
    }

    pub fn save(&self) -> Savefig {
        Savefig { fig: self.fig.clone(), dpi: None, tight: false }
    }
}

/// Options for saving a [`Figure`] to a file.
pub struct Savefig {
    fig: PyObject,
    dpi: Option<f64>,
    tight: bool,
}

impl Savefig {
    pub fn dpi(&mut self, dpi: f64) -> &mut Self {
        if dpi > 0. {
            self.dpi = Some(dpi);
        } else {
            self.dpi = None;
        }
        self
    }

    /// Trim the saved image to the extent of the figure's contents.
    pub fn tight_bbox(&mut self) -> &mut Self {
        self.tight = true;
        self
    }

    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        Python::with_gil(|py| {
            let kwargs = PyDict::new(py);
            if let Some(dpi) = self.dpi {
                kwargs.set_item("dpi", dpi).unwrap()
            }
            if self.tight {
                kwargs.set_item("bbox_inches", "tight").unwrap()
            }
            self.fig.call_method(
                py, intern!(py, "savefig"),
                (path.as_ref(),), Some(kwargs)
            ).map_err(|e| {
                    if e.is_instance_of::<PyFileNotFoundError>(py) {
                        Error::FileNotFoundError
                    } else if e.is_instance_of::<PyPermissionError>(py) {
                        Error::PermissionError
                    } else {
                        Error::Python(e)
                    }
                })
        })?;
        Ok(())
    }
}


/// Return a new pyplot-tracked [`Figure`].
pub fn figure() -> Result<Figure, Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        let fig = getattr!(py, pyplot, "figure")
            .call0(py).map_err(Error::Python)?;
        Ok(Figure { fig: fig.into() })
    })
}

/// Return a new [`Figure`] divided into an `R` × `C` grid of [`Axes`].
pub fn subplots<const R: usize, const C: usize>(
) -> Result<(Figure, [[Axes; C]; R]), Error> {
    let fig = figure()?;
    let ax = fig.subplots()?;
    Ok((fig, ax))
}

/// Same as [`subplots`] with the axes sharing their x and/or y range.
pub fn subplots_sharing<const R: usize, const C: usize>(
    sharex: bool, sharey: bool) -> Result<(Figure, [[Axes; C]; R]), Error> {
    let fig = figure()?;
    let ax = fig.subplots_sharing(sharex, sharey)?;
    Ok((fig, ax))
}

/// Display all open figures.
pub fn show() -> Result<(), Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        getattr!(py, pyplot, "show").call0(py)
            .map_err(Error::Python)?;
        Ok(())
    })
}


impl Axes {
    /// Plot `y` versus `x` as lines and/or markers.
    ///
    /// # Example
    ///
    /// ```
    /// use mpl_gallery as plt;
    /// let (fig, [[mut ax]]) = plt::subplots()?;
    /// ax.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).plot()?;
    /// fig.save().to_file("target/doc_xy.png")?;
    /// # Ok::<(), mpl_gallery::Error>(())
    /// ```
    #[must_use]
    pub fn xy<'a, D>(&'a mut self, x: &'a D, y: &'a D) -> XY<'a, D>
    where D: Data + ?Sized {
        // The chain leading to plot starts with the data (using this
        // function) so that additional data may be added, each dataset
        // carrying the options in effect when the next one is pushed.
        // We also mutably borrow `self` to reflect that the final
        // `.plot()` will mutate the underlying Python object.
        XY { axes: self,
             options: PlotOptions::new(),
             data: PlotData::XY(x, y),
             prev_data: vec![] }
    }

    /// Plot `y` versus its indices as lines and/or markers.
    ///
    /// # Example
    ///
    /// ```
    /// use mpl_gallery as plt;
    /// let (fig, [[mut ax]]) = plt::subplots()?;
    /// ax.y(&[1., 4., 2., 3.]).plot()?;
    /// fig.save().to_file("target/doc_y.png")?;
    /// # Ok::<(), mpl_gallery::Error>(())
    /// ```
    #[must_use]
    pub fn y<'a, D>(&'a mut self, y: &'a D) -> XY<'a, D>
    where D: Data + ?Sized {
        XY { axes: self,
             options: PlotOptions::new(),
             data: PlotData::Y(y),
             prev_data: vec![] }
    }

    /// Draw `y` versus `x` as individual points.
    ///
    /// # Example
    ///
    /// ```
    /// use mpl_gallery as plt;
    /// let (fig, [[mut ax]]) = plt::subplots()?;
    /// ax.scatter(&[1., 2., 3.], &[2., 3., 5.]).color("red").draw()?;
    /// fig.save().to_file("target/doc_scatter.png")?;
    /// # Ok::<(), mpl_gallery::Error>(())
    /// ```
    #[must_use]
    pub fn scatter<'a, D>(&'a mut self, x: &'a D, y: &'a D) -> Scatter<'a, D>
    where D: Data + ?Sized {
        Scatter { axes: self,
                  x, y,
                  size: None,
                  color: "",
                  intensities: None,
                  cmap: "",
                  alpha: None,
                  label: "" }
    }

    /// Draw a pie chart whose wedges are proportional to `sizes`.
    ///
    /// # Example
    ///
    /// ```
    /// use mpl_gallery as plt;
    /// let (fig, [[mut ax]]) = plt::subplots()?;
    /// ax.pie(&[10., 20., 30., 40.])
    ///     .labels(&["Frogs", "Hogs", "Dogs", "Logs"])
    ///     .draw()?;
    /// fig.save().to_file("target/doc_pie.png")?;
    /// # Ok::<(), mpl_gallery::Error>(())
    /// ```
    #[must_use]
    pub fn pie<'a, D>(&'a mut self, sizes: &'a D) -> Pie<'a, D>
    where D: Data + ?Sized {
        Pie { axes: self,
              sizes,
              labels: None,
              autopct: "",
              hatches: None }
    }

    /// Place `text` at the data point `xy`.
    #[must_use]
    pub fn annotate<'a>(&'a mut self, text: &'a str, xy: (f64, f64))
                        -> Annotate<'a> {
        Annotate { axes: self, text, xy, offset: None, ha: "" }
    }

    pub fn set_title(&mut self, v: &str) -> &mut Self {
        meth!(self.ax, set_title, (v,)).unwrap();
        self
    }

    /// Set the yaxis' scale.  Possible values for `v` are "linear",
    /// "log", "symlog", "logit",...
    pub fn set_yscale(&mut self, v: &str) -> &mut Self {
        meth!(self.ax, set_yscale, (v,)).unwrap();
        self
    }

    pub fn grid(&mut self) -> &mut Self {
        meth!(self.ax, grid, (true,)).unwrap();
        self
    }

    pub fn set_xlabel(&mut self, label: &str) -> &mut Self {
        meth!(self.ax, set_xlabel, (label,)).unwrap();
        self
    }

    pub fn set_ylabel(&mut self, label: &str) -> &mut Self {
        meth!(self.ax, set_ylabel, (label,)).unwrap();
        self
    }

    pub fn legend(&mut self) -> &mut Self {
        meth!(self.ax, legend, ()).unwrap();
        self
    }

    /// Hide the axes, its frame and its ticks.
    pub fn set_axis_off(&mut self) -> &mut Self {
        meth!(self.ax, set_axis_off, ()).unwrap();
        self
    }
}

enum PlotData<'a, D>
where D: ?Sized {
    XY(&'a D, &'a D),
    Y(&'a D),
}

impl<'a, D> PlotData<'a, D>
where D: Data + ?Sized {
    fn check_len(&self) -> Result<(), Error> {
        match self {
            PlotData::XY(x, y) if x.len() != y.len() =>
                Err(Error::LengthMismatch { left: x.len(),
                                            right: y.len() }),
            _ => Ok(()),
        }
    }
}

#[derive(Clone)]
struct PlotOptions<'a> {
    fmt: &'a str,
    animated: bool,
    antialiased: bool,
    label: &'a str,
    color: &'a str,
    marker: &'a str,
    linestyle: &'a str,
    linewidth: Option<f64>,
    markersize: Option<f64>,
}

impl<'a> PlotOptions<'a> {
    fn new() -> PlotOptions<'static> {
        PlotOptions { fmt: "", animated: false, antialiased: true,
                      label: "", color: "", marker: "", linestyle: "",
                      linewidth: None, markersize: None }
    }

    fn kwargs(&'a self, py: Python<'a>) -> &'a PyDict {
        let kwargs = PyDict::new(py);
        if self.animated {
            kwargs.set_item("animated", true).unwrap()
        }
        kwargs.set_item("antialiased", self.antialiased).unwrap();
        if !self.label.is_empty() {
            kwargs.set_item("label", self.label).unwrap()
        }
        if !self.color.is_empty() {
            kwargs.set_item("color", self.color).unwrap()
        }
        if !self.marker.is_empty() {
            kwargs.set_item("marker", self.marker).unwrap()
        }
        if !self.linestyle.is_empty() {
            kwargs.set_item("linestyle", self.linestyle).unwrap()
        }
        if let Some(w) = self.linewidth {
            kwargs.set_item("linewidth", w).unwrap()
        }
        if let Some(s) = self.markersize {
            kwargs.set_item("markersize", s).unwrap()
        }
        kwargs
    }

    fn plot_xy<D>(&self, py: Python<'_>, numpy: &Numpy, axes: &Axes,
        x: &D, y: &D) -> PyResult<PyObject>
    where D: Data + ?Sized {
        let xn = x.to_numpy(py, numpy);
        let yn = y.to_numpy(py, numpy);
        axes.ax.call_method(py, "plot", (xn, yn, self.fmt),
                            Some(self.kwargs(py)))
    }

    fn plot_y<D>(&self, py: Python<'_>, numpy: &Numpy, axes: &Axes,
        y: &D) -> PyResult<PyObject>
    where D: Data + ?Sized {
        let yn = y.to_numpy(py, numpy);
        axes.ax.call_method(py, "plot", (yn, self.fmt),
                            Some(self.kwargs(py)))
    }

    fn plot_data<D>(&self, py: Python<'_>, numpy: &Numpy, axes: &Axes,
        data: &PlotData<'_, D>) -> PyResult<PyObject>
    where D: Data + ?Sized {
        match data {
            PlotData::XY(x, y) => self.plot_xy(py, numpy, axes, *x, *y),
            PlotData::Y(y) => self.plot_y(py, numpy, axes, *y),
        }
    }

}

/// Declare methods to set the options assuming `self.options` exists.
macro_rules! set_plotoptions { () => {
    /// Set the format string, e.g. "bo" for blue circles or "r-" for
    /// a red line.
    #[must_use]
    pub fn fmt(mut self, fmt: &'a str) -> Self {
        self.options.fmt = fmt;
        self
    }

    #[must_use]
    pub fn animated(mut self) -> Self {
        self.options.animated = true;
        self
    }

    #[must_use]
    pub fn antialiased(mut self, b: bool) -> Self {
        self.options.antialiased = b;
        self
    }

    /// Name the dataset in the axes' [`Axes::legend`].
    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.options.label = label;
        self
    }

    #[must_use]
    pub fn color(mut self, color: &'a str) -> Self {
        self.options.color = color;
        self
    }

    /// Set the marker style, e.g. "H" for hexagons or "o" for circles.
    #[must_use]
    pub fn marker(mut self, marker: &'a str) -> Self {
        self.options.marker = marker;
        self
    }

    /// Set the line style, e.g. ":" for a dotted line.
    #[must_use]
    pub fn linestyle(mut self, linestyle: &'a str) -> Self {
        self.options.linestyle = linestyle;
        self
    }

    #[must_use]
    pub fn linewidth(mut self, w: f64) -> Self {
        self.options.linewidth = Some(w);
        self
    }

    #[must_use]
    pub fn markersize(mut self, s: f64) -> Self {
        self.options.markersize = Some(s);
        self
    }
}}

/// Line plot under construction; finish it with [`XY::plot`].
#[must_use]
pub struct XY<'a, D>
where D: ?Sized {
    axes: &'a Axes,
    // Latest data and its setting.
    options: PlotOptions<'a>,
    data: PlotData<'a, D>,
    // Previous data with their settings.
    prev_data: Vec<(PlotOptions<'a>, PlotData<'a, D>)>,
}

impl<'a, D> XY<'a, D>
where D: Data + ?Sized {
    set_plotoptions!();

    /// Plot the data with the options specified in [`XY`] and return
    /// a handle to the lines of the last dataset.
    ///
    /// Paired sequences must have the same length; otherwise
    /// [`Error::LengthMismatch`] is returned and nothing is drawn.
    pub fn plot(self) -> Result<Line2D, Error> {
        self.data.check_len()?;
        for (_, data) in self.prev_data.iter() {
            data.check_len()?;
        }
        let numpy = pymod!(NUMPY)?;
        Python::with_gil(|py| {
            for (opt, data) in self.prev_data.iter() {
                opt.plot_data(py, numpy, self.axes, data)
                    .map_err(Error::Python)?;
            }
            let lines = self.options
                .plot_data(py, numpy, self.axes, &self.data)
                .map_err(Error::Python)?;
            let lines: &PyList = lines.downcast(py)
                .map_err(|e| Error::Python(e.into()))?;
            Ok(Line2D { line2d: lines.into() })
        })
    }

    /// Add the dataset (`x`, `y`).  Options set afterwards apply to
    /// the new dataset only.
    #[must_use]
    pub fn xy(mut self, x: &'a D, y: &'a D) -> Self {
        let mut data = PlotData::XY(x, y);
        swap(&mut data, &mut self.data);
        self.prev_data.push((self.options.clone(), data));
        self
    }

    /// Add the dataset `y`.
    #[must_use]
    pub fn y(mut self, y: &'a D) -> Self {
        let mut data = PlotData::Y(y);
        swap(&mut data, &mut self.data);
        self.prev_data.push((self.options.clone(), data));
        self
    }
}

/// Scatter plot under construction; finish it with [`Scatter::draw`].
#[must_use]
pub struct Scatter<'a, D>
where D: ?Sized {
    axes: &'a Axes,
    x: &'a D,
    y: &'a D,
    size: Option<f64>,
    color: &'a str,
    intensities: Option<&'a [f64]>,
    cmap: &'a str,
    alpha: Option<f64>,
    label: &'a str,
}

impl<'a, D> Scatter<'a, D>
where D: Data + ?Sized {
    /// Set the marker area in points².
    #[must_use]
    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Color all points with the named color, e.g. "blue".
    #[must_use]
    pub fn color(mut self, color: &'a str) -> Self {
        self.color = color;
        self
    }

    /// Color each point individually by mapping the values through
    /// the colormap (see [`Scatter::cmap`]).  There must be one value
    /// per point.
    #[must_use]
    pub fn intensities(mut self, values: &'a [f64]) -> Self {
        self.intensities = Some(values);
        self
    }

    /// Name the colormap used with [`Scatter::intensities`],
    /// e.g. "viridis".
    #[must_use]
    pub fn cmap(mut self, cmap: &'a str) -> Self {
        self.cmap = cmap;
        self
    }

    /// Set the transparency of the points, from 0 (transparent) to
    /// 1 (opaque).
    #[must_use]
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    /// Name the dataset in the axes' [`Axes::legend`].
    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    /// Draw the points and return a handle to them, usable with
    /// [`Figure::colorbar`].
    ///
    /// Paired sequences must have the same length; otherwise
    /// [`Error::LengthMismatch`] is returned and nothing is drawn.
    pub fn draw(self) -> Result<PathCollection, Error> {
        if self.x.len() != self.y.len() {
            return Err(Error::LengthMismatch { left: self.x.len(),
                                               right: self.y.len() });
        }
        if let Some(c) = self.intensities {
            if c.len() != self.x.len() {
                return Err(Error::LengthMismatch { left: self.x.len(),
                                                   right: c.len() });
            }
        }
        let numpy = pymod!(NUMPY)?;
        Python::with_gil(|py| {
            let xn = self.x.to_numpy(py, numpy);
            let yn = self.y.to_numpy(py, numpy);
            let kwargs = PyDict::new(py);
            if let Some(s) = self.size {
                kwargs.set_item("s", s).unwrap()
            }
            if !self.color.is_empty() {
                kwargs.set_item("c", self.color).unwrap()
            }
            if let Some(c) = self.intensities {
                kwargs.set_item("c", c.to_numpy(py, numpy)).unwrap()
            }
            if !self.cmap.is_empty() {
                kwargs.set_item("cmap", self.cmap).unwrap()
            }
            if let Some(a) = self.alpha {
                kwargs.set_item("alpha", a).unwrap()
            }
            if !self.label.is_empty() {
                kwargs.set_item("label", self.label).unwrap()
            }
            let pc = self.axes.ax
                .call_method(py, intern!(py, "scatter"), (xn, yn),
                             Some(kwargs))
                .map_err(Error::Python)?;
            Ok(PathCollection { pc })
        })
    }
}

/// Pie chart under construction; finish it with [`Pie::draw`].
#[must_use]
pub struct Pie<'a, D>
where D: ?Sized {
    axes: &'a Axes,
    sizes: &'a D,
    labels: Option<&'a [&'a str]>,
    autopct: &'a str,
    hatches: Option<&'a [&'a str]>,
}

impl<'a, D> Pie<'a, D>
where D: Data + ?Sized {
    /// Name each wedge.  There must be one label per wedge.
    #[must_use]
    pub fn labels(mut self, labels: &'a [&'a str]) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Write each wedge's share inside it, using a printf style
    /// format, e.g. "%1.1f%%".
    #[must_use]
    pub fn autopct(mut self, fmt: &'a str) -> Self {
        self.autopct = fmt;
        self
    }

    /// Fill each wedge with a hatch pattern, e.g. "oO" or ".||.".
    /// There must be one pattern per wedge.
    #[must_use]
    pub fn hatches(mut self, hatches: &'a [&'a str]) -> Self {
        self.hatches = Some(hatches);
        self
    }

    /// Draw the wedges.
    ///
    /// Label and hatch sequences must have one entry per wedge;
    /// otherwise [`Error::LengthMismatch`] is returned and nothing is
    /// drawn.
    pub fn draw(self) -> Result<(), Error> {
        for seq in [self.labels, self.hatches].into_iter().flatten() {
            if seq.len() != self.sizes.len() {
                return Err(Error::LengthMismatch {
                    left: self.sizes.len(),
                    right: seq.len() });
            }
        }
        let numpy = pymod!(NUMPY)?;
        Python::with_gil(|py| {
            let sizes = self.sizes.to_numpy(py, numpy);
            let kwargs = PyDict::new(py);
            if let Some(labels) = self.labels {
                kwargs.set_item("labels", labels.to_vec()).unwrap()
            }
            if !self.autopct.is_empty() {
                kwargs.set_item("autopct", self.autopct).unwrap()
            }
            if let Some(hatches) = self.hatches {
                kwargs.set_item("hatch", hatches.to_vec()).unwrap()
            }
            self.axes.ax
                .call_method(py, intern!(py, "pie"), (sizes,),
                             Some(kwargs))
                .map_err(Error::Python)?;
            Ok(())
        })
    }
}

/// Annotation under construction; finish it with [`Annotate::draw`].
#[must_use]
pub struct Annotate<'a> {
    axes: &'a Axes,
    text: &'a str,
    xy: (f64, f64),
    offset: Option<(f64, f64)>,
    ha: &'a str,
}

impl<'a> Annotate<'a> {
    /// Offset the text from the annotated point, in points.
    #[must_use]
    pub fn offset_points(mut self, dx: f64, dy: f64) -> Self {
        self.offset = Some((dx, dy));
        self
    }

    /// Set the horizontal alignment of the text: "left", "center" or
    /// "right".
    #[must_use]
    pub fn ha(mut self, ha: &'a str) -> Self {
        self.ha = ha;
        self
    }

    pub fn draw(self) -> Result<(), Error> {
        Python::with_gil(|py| {
            let kwargs = PyDict::new(py);
            if let Some((dx, dy)) = self.offset {
                kwargs.set_item("textcoords", "offset points").unwrap();
                kwargs.set_item("xytext", (dx, dy)).unwrap();
            }
            if !self.ha.is_empty() {
                kwargs.set_item("ha", self.ha).unwrap()
            }
            self.axes.ax
                .call_method(py, intern!(py, "annotate"),
                             (self.text, self.xy), Some(kwargs))
                .map_err(Error::Python)?;
            Ok(())
        })
    }
}

/// Colorbar under construction; finish it with [`Colorbar::draw`].
#[must_use]
pub struct Colorbar<'a> {
    fig: &'a Figure,
    mappable: &'a PathCollection,
    label: &'a str,
}

impl<'a> Colorbar<'a> {
    /// Write `label` along the colorbar.
    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    pub fn draw(self) -> Result<(), Error> {
        Python::with_gil(|py| {
            let kwargs = PyDict::new(py);
            if !self.label.is_empty() {
                kwargs.set_item("label", self.label).unwrap()
            }
            self.fig.fig
                .call_method(py, intern!(py, "colorbar"),
                             (self.mappable.pc.clone(),), Some(kwargs))
                .map_err(Error::Python)?;
            Ok(())
        })
    }
}


impl Line2D {
    fn set_kw<'a, I>(&'a self, kwargs: I) -> &'a Self
    where I: IntoPyDict {
        Python::with_gil(|py| {
            let kwargs = Some(kwargs.into_py_dict(py));
            for l in self.line2d.as_ref(py).iter() {
                l.call_method("set", (), kwargs).unwrap();
            }
        });
        self
    }

    /// Name the lines in the axes' [`Axes::legend`].
    pub fn label(&self, label: &str) -> &Self {
        self.set_kw([("label", label)])
    }
}


#[cfg(doctest)]
doc_comment::doctest!("../README.md");


#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn assert_saved(path: &str) -> TestResult {
        let meta = std::fs::metadata(path)?;
        assert!(meta.len() > 0, "{} is empty", path);
        Ok(())
    }

    #[test]
    fn a_basic_line() -> TestResult {
        let (fig, [[mut ax]]) = subplots()?;
        ax.xy(&[1., 2., 3., 4., 5.], &[1., 4., 9., 16., 25.]).plot()?;
        ax.set_xlabel("X-axis label")
            .set_ylabel("Y-axis label")
            .set_title("Title of the Plot");
        fig.save().to_file("target/test_basic_line.png")?;
        assert_saved("target/test_basic_line.png")
    }

    #[test]
    fn a_basic_row() -> TestResult {
        let (fig, [[mut ax0, mut ax1]]) = subplots()?;
        ax0.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).plot()?;
        ax1.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).fmt(".").plot()?;
        fig.save().to_file("target/test_basic_row.png")?;
        assert_saved("target/test_basic_row.png")
    }

    #[test]
    fn a_basic_col() -> TestResult {
        let (fig, [[mut ax0], [mut ax1]]) = subplots()?;
        ax0.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).plot()?;
        ax1.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).fmt(".").plot()?;
        fig.save().to_file("target/test_basic_col.png")?;
        assert_saved("target/test_basic_col.png")
    }

    #[test]
    fn a_basic_grid() -> TestResult {
        let (fig, [[mut ax0, mut ax1],
                   [mut ax2, mut ax3]]) = subplots()?;
        ax0.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).plot()?;
        ax1.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).fmt(".").plot()?;
        ax2.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).fmt("r").plot()?;
        ax3.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).fmt("r.").plot()?;
        fig.save().to_file("target/test_basic_grid.png")?;
        assert_saved("target/test_basic_grid.png")
    }

    #[test]
    fn shared_axes_grid() -> TestResult {
        let (fig, [[mut ax0, mut ax1],
                   [mut ax2, mut ax3]]) = subplots_sharing(true, true)?;
        ax0.xy(&[1., 2., 3.], &[1., 4., 9.]).plot()?;
        ax1.xy(&[1., 2., 3.], &[1., 2., 3.]).plot()?;
        ax2.xy(&[1., 2., 3.], &[9., 4., 1.]).plot()?;
        ax3.xy(&[1., 2., 3.], &[3., 6., 9.]).plot()?;
        fig.tight_layout()?;
        ax1.set_axis_off();
        fig.save().to_file("target/test_shared_grid.png")?;
        assert_saved("target/test_shared_grid.png")
    }

    #[test]
    fn figure_without_pyplot() -> TestResult {
        let fig = Figure::new()?;
        let [[mut ax]] = fig.subplots()?;
        ax.y(&[1., 4., 2., 3.]).plot()?;
        fig.save().to_file("target/test_no_pyplot.png")?;
        assert_saved("target/test_no_pyplot.png")
    }

    #[test]
    fn styled_datasets_share_one_plot_call() -> TestResult {
        let (fig, [[mut ax]]) = subplots()?;
        ax.xy(&[1., 2., 3., 4., 5.], &[1., 4., 9., 16., 25.])
            .fmt("bo").label("Dataset 1")
            .xy(&[1., 2., 3., 4., 5.], &[1., 2., 3., 4., 5.])
            .fmt("go").label("Dataset 2")
            .plot()?;
        ax.legend();
        fig.save().to_file("target/test_styled_datasets.png")?;
        assert_saved("target/test_styled_datasets.png")
    }

    #[test]
    fn line_label_feeds_legend() -> TestResult {
        let (fig, [[mut ax]]) = subplots()?;
        let line = ax.xy(&[1., 2., 3.], &[1., 4., 9.]).plot()?;
        line.label("squares");
        ax.legend();
        fig.save().to_file("target/test_line_label.png")?;
        assert_saved("target/test_line_label.png")
    }

    #[test]
    fn log_scale_axes() -> TestResult {
        let (fig, [[mut ax]]) = subplots()?;
        ax.xy(&[1., 2., 3., 4.], &[10., 100., 1000., 10000.]).plot()?;
        ax.set_yscale("log");
        fig.save().to_file("target/test_log_scale.png")?;
        assert_saved("target/test_log_scale.png")
    }

    #[test]
    fn scatter_with_colorbar() -> TestResult {
        let (fig, [[mut ax]]) = subplots()?;
        let points = ax.scatter(&[1., 2., 3., 4., 5.],
                                &[2., 3., 5., 7., 11.])
            .intensities(&[20., 10., 30., 40., 50.])
            .cmap("viridis")
            .alpha(1.)
            .draw()?;
        ax.annotate("First Point", (1., 2.))
            .offset_points(10., 10.)
            .ha("center")
            .draw()?;
        ax.set_title("Scatter Plot Example").grid();
        fig.colorbar(&points).label("Color Intensity").draw()?;
        fig.save().dpi(300.).tight_bbox()
            .to_file("target/test_scatter_colorbar.png")?;
        assert_saved("target/test_scatter_colorbar.png")
    }

    #[test]
    fn pie_wedges() -> TestResult {
        let (fig, [[mut ax]]) = subplots()?;
        ax.pie(&[10., 20., 30., 40.])
            .labels(&["Frogs", "Hogs", "Dogs", "Logs"])
            .autopct("%1.1f%%")
            .hatches(&["**O", "oO", "O.O", ".||."])
            .draw()?;
        fig.save().to_file("target/test_pie.png")?;
        assert_saved("target/test_pie.png")
    }

    #[test]
    fn mismatched_lengths_are_rejected() -> TestResult {
        let (_fig, [[mut ax]]) = subplots()?;

        let x = vec![1., 2., 3.];
        let y = vec![1., 2.];
        let err = ax.xy(&x, &y).plot().unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { left: 3, right: 2 }));

        let err = ax.scatter(&[1., 2., 3.], &[4., 5., 6.])
            .intensities(&[1., 2.])
            .draw()
            .unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { left: 3, right: 2 }));

        let err = ax.pie(&[10., 20., 30., 40.])
            .labels(&["Frogs", "Hogs"])
            .draw()
            .unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { left: 4, right: 2 }));

        let err = ax.pie(&[10., 20., 30., 40.])
            .hatches(&["**O", "oO", "O.O"])
            .draw()
            .unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { left: 4, right: 3 }));
        Ok(())
    }
}
