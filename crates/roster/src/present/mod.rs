//! Output produced from roster state: the table, the summary charts and the
//! printable sheet.

pub mod charts;
pub mod print;
pub mod table;

pub use charts::{gender_breakdown, status_breakdown, Breakdown};
pub use print::{print_employee, render_html, FileSurface, PrintJob, PrintSurface};
pub use table::TableFormat;
