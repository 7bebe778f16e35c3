//! Printable employee sheets.
//!
//! [`render_html`] is pure. [`print_employee`] hands the document to a
//! [`PrintSurface`]; when the surface cannot be opened nothing happens and
//! nothing is reported.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::model::Employee;

/// Build the standalone HTML sheet for `employee`.
#[must_use]
pub fn render_html(employee: &Employee) -> String {
    let dob = employee.dob.format("%Y-%m-%d").to_string();
    let rows = [
        ("Name", employee.full_name.as_str()),
        ("Gender", employee.gender.as_str()),
        ("Date of Birth", dob.as_str()),
        ("State", employee.state_or_empty()),
        ("Status", employee.status_label()),
    ]
    .iter()
    .map(|(label, value)| {
        format!(
            "          <tr><th>{}</th><td>{}</td></tr>\n",
            label,
            escape_html(value)
        )
    })
    .collect::<String>();

    format!(
        r#"<html>
  <head>
    <title>Employee Details</title>
    <style>
      body {{
        font-family: Arial, sans-serif;
        padding: 20px;
      }}
      table {{
        width: 100%;
        border-collapse: collapse;
        margin-top: 20px;
      }}
      td, th {{
        border: 1px solid #000;
        padding: 8px;
      }}
    </style>
  </head>
  <body>
    <h2>Employee Details</h2>
    <table>
{rows}    </table>
  </body>
</html>
"#
    )
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Somewhere a document can be shown and printed.
pub trait PrintSurface {
    /// The open surface.
    type Job: PrintJob;

    /// Open a fresh surface, or `None` if that is not possible right now.
    fn open(&mut self) -> Option<Self::Job>;
}

/// An open print surface.
pub trait PrintJob {
    /// Replace the surface contents with `html`.
    fn write(&mut self, html: &str);

    /// Ask the platform to print what was written.
    fn print(&mut self);

    /// Release the surface.
    fn close(self);
}

/// Render `employee` and print it on `surface`.
///
/// Returns `false` when the surface could not be opened; nothing else is
/// reported to the caller.
pub fn print_employee<P: PrintSurface>(surface: &mut P, employee: &Employee) -> bool {
    let Some(mut job) = surface.open() else {
        debug!(id = employee.id, "Print surface unavailable");
        return false;
    };
    job.write(&render_html(employee));
    job.print();
    job.close();
    true
}

/// Prints by writing an HTML file and optionally opening it with the
/// system's default handler.
#[derive(Debug, Clone)]
pub struct FileSurface {
    dir: PathBuf,
    open_with_system: bool,
}

impl FileSurface {
    /// Create a surface writing into `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, open_with_system: bool) -> Self {
        Self {
            dir: dir.into(),
            open_with_system,
        }
    }

    /// The output directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl PrintSurface for FileSurface {
    type Job = FileJob;

    fn open(&mut self) -> Option<FileJob> {
        std::fs::create_dir_all(&self.dir).ok()?;
        let name = format!(
            "employee-{}.html",
            chrono::Utc::now().format("%Y%m%d-%H%M%S%3f")
        );
        Some(FileJob {
            path: self.dir.join(name),
            written: false,
            open_with_system: self.open_with_system,
        })
    }
}

/// A document file waiting to be printed.
#[derive(Debug)]
pub struct FileJob {
    path: PathBuf,
    written: bool,
    open_with_system: bool,
}

impl FileJob {
    /// Where the document is written.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrintJob for FileJob {
    fn write(&mut self, html: &str) {
        self.written = std::fs::write(&self.path, html).is_ok();
    }

    fn print(&mut self) {
        if !self.written {
            return;
        }
        info!("Printable sheet written to {}", self.path.display());
        if self.open_with_system {
            open_with_system(&self.path);
        }
    }

    fn close(self) {}
}

fn open_with_system(path: &Path) {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else {
        Command::new("xdg-open")
    };
    let spawned = command
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
    if let Err(e) = spawned {
        debug!("System opener unavailable: {e}");
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::Gender;

    fn asha() -> Employee {
        Employee {
            id: 1,
            full_name: "Asha Rao".to_string(),
            gender: Gender::Female,
            dob: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            state: Some("Kerala".to_string()),
            active: false,
            image: Some("data:image/png;base64,AAAA".to_string()),
        }
    }

    struct Recorder {
        available: bool,
        log: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
    }

    struct RecorderJob {
        log: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
    }

    impl PrintSurface for Recorder {
        type Job = RecorderJob;

        fn open(&mut self) -> Option<RecorderJob> {
            self.available.then(|| RecorderJob {
                log: std::rc::Rc::clone(&self.log),
            })
        }
    }

    impl PrintJob for RecorderJob {
        fn write(&mut self, html: &str) {
            self.log.borrow_mut().push(format!("write {}", html.len()));
        }

        fn print(&mut self) {
            self.log.borrow_mut().push("print".to_string());
        }

        fn close(self) {
            self.log.borrow_mut().push("close".to_string());
        }
    }

    #[test]
    fn test_render_contains_five_fields() {
        let html = render_html(&asha());
        assert!(html.contains("<title>Employee Details</title>"));
        assert!(html.contains("<tr><th>Name</th><td>Asha Rao</td></tr>"));
        assert!(html.contains("<tr><th>Gender</th><td>Female</td></tr>"));
        assert!(html.contains("<tr><th>Date of Birth</th><td>1990-01-01</td></tr>"));
        assert!(html.contains("<tr><th>State</th><td>Kerala</td></tr>"));
        assert!(html.contains("<tr><th>Status</th><td>Inactive</td></tr>"));
        assert!(!html.contains("base64"));
    }

    #[test]
    fn test_render_escapes_values() {
        let mut employee = asha();
        employee.full_name = "<script>alert('x') & co</script>".to_string();
        let html = render_html(&employee);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;) &amp; co&lt;/script&gt;"));
    }

    #[test]
    fn test_print_runs_write_print_close() {
        let log = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut surface = Recorder {
            available: true,
            log: std::rc::Rc::clone(&log),
        };

        assert!(print_employee(&mut surface, &asha()));
        let events = log.borrow();
        assert_eq!(events.len(), 3);
        assert!(events[0].starts_with("write "));
        assert_eq!(events[1], "print");
        assert_eq!(events[2], "close");
    }

    #[test]
    fn test_print_unavailable_surface_is_silent() {
        let log = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut surface = Recorder {
            available: false,
            log: std::rc::Rc::clone(&log),
        };

        assert!(!print_employee(&mut surface, &asha()));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_file_surface_writes_document() {
        let dir = std::env::temp_dir().join(format!("roster_print_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let mut surface = FileSurface::new(&dir, false);

        let mut job = surface.open().unwrap();
        job.write(&render_html(&asha()));
        job.print();
        let written = std::fs::read_to_string(job.path()).unwrap();
        job.close();

        assert!(written.contains("Asha Rao"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_surface_unwritable_dir() {
        let blocker = std::env::temp_dir().join(format!("roster_print_block_{}", std::process::id()));
        std::fs::write(&blocker, "not a directory").unwrap();
        let mut surface = FileSurface::new(blocker.join("sub"), false);

        assert!(!print_employee(&mut surface, &asha()));
        let _ = std::fs::remove_file(&blocker);
    }
}
