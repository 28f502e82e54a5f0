//! CLI command definitions using Clap.

use clap::{Args, Parser, Subcommand};
use mwc::{
  AppQuery, AppSelector, AppWindowQuery, Mwc, Point, ProcessId, SetWindowFrame, SetZoom, Size,
  WindowSelector, ZoomQuery,
};
use mwc_ws::{main_thread, start_server, Bridge, ServerConfig, DEFAULT_WS_HOST, DEFAULT_WS_PORT};
use serde::Serialize;

use crate::error::CliError;
use crate::fullscreen;

/// macOS window control: displays, app windows and screen zoom.
#[derive(Parser, Debug)]
#[command(name = "mwc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
  /// More log output (-v info, -vv debug, -vvv trace).
  #[arg(short, long, global = true, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Print results as JSON.
  #[arg(long, global = true)]
  json: bool,

  #[command(subcommand)]
  command: Commands,
}

/// Application argument shared by window commands.
#[derive(Args, Debug, Clone)]
pub struct AppArg {
  /// Application name, or process id with --pid.
  #[arg(value_name = "APP")]
  app: String,

  /// Treat APP as a process id.
  #[arg(long)]
  pid: bool,
}

impl AppArg {
  fn selector(&self) -> Result<AppSelector, CliError> {
    if self.pid {
      let pid = self
        .app
        .parse::<i32>()
        .map_err(|_| CliError::InvalidApp(format!("{} is not a pid", self.app)))?;
      Ok(AppSelector::Pid(ProcessId(pid)))
    } else {
      Ok(AppSelector::Name(self.app.clone()))
    }
  }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Report whether accessibility permission is granted.
  Permission,

  /// List running applications.
  Apps,

  /// List an application's windows.
  Windows {
    #[command(flatten)]
    app: AppArg,
  },

  /// List every application that has windows, with its windows.
  #[command(name = "window-apps")]
  WindowApps,

  /// List displays.
  Displays,

  /// Resize (and optionally move) an application's main window.
  #[command(allow_negative_numbers = true)]
  #[command(after_long_help = "Example:\n  mwc resize Terminal 1280 800 0 25")]
  Resize {
    #[command(flatten)]
    app: AppArg,
    width: f64,
    height: f64,
    /// Left edge, global coordinates.
    #[arg(requires = "y")]
    x: Option<f64>,
    /// Top edge, global coordinates.
    y: Option<f64>,
  },

  /// Bring an application window to the front.
  Activate {
    #[command(flatten)]
    app: AppArg,
    /// Window index in the app's window list.
    #[arg(long, conflicts_with = "title")]
    index: Option<usize>,
    /// Exact window title.
    #[arg(long)]
    title: Option<String>,
  },

  /// Dump accessibility details of an application's main window.
  Inspect {
    #[command(flatten)]
    app: AppArg,
  },

  /// Show the zoom state, or set it.
  #[command(allow_negative_numbers = true)]
  #[command(after_long_help = "Examples:\n  mwc zoom\n  mwc zoom 1.2 960 640\n  mwc zoom 1")]
  Zoom {
    /// Magnification factor; omit to print the current state.
    factor: Option<f64>,
    /// Zoom center x.
    #[arg(requires_all = ["factor", "cy"])]
    cx: Option<f64>,
    /// Zoom center y.
    cy: Option<f64>,
    /// Smooth the zoomed image (default when zooming in).
    #[arg(long, requires = "factor", conflicts_with = "no_smooth")]
    smooth: bool,
    /// Do not smooth the zoomed image.
    #[arg(long, requires = "factor")]
    no_smooth: bool,
  },

  /// Fit an application's window under the menu bar and zoom past its titlebar.
  Fullscreen {
    #[command(flatten)]
    app: AppArg,
  },

  /// Invoke a bridge method and print the envelope.
  #[command(after_long_help = "Example:\n  mwc call getWindowSize '{\"app\": {\"name\": \"Terminal\"}}'")]
  Call {
    /// Method name, e.g. getDisplays.
    method: String,
    /// JSON arguments.
    #[arg(default_value = "")]
    args: String,
  },

  /// Serve the bridge over WebSocket.
  Serve {
    #[arg(long, env = "MWC_WS_HOST", default_value = DEFAULT_WS_HOST)]
    host: String,
    #[arg(long, env = "MWC_WS_PORT", default_value_t = DEFAULT_WS_PORT)]
    port: u16,
  },
}

impl Cli {
  pub fn execute(self) -> Result<(), CliError> {
    let mwc = Mwc::new();
    let json = self.json;
    match self.command {
      Commands::Permission => {
        let granted = mwc.has_accessibility_permission();
        emit(json, &granted, || {
          if granted {
            "granted".to_owned()
          } else {
            "not granted".to_owned()
          }
        })
      }
      Commands::Apps => {
        let apps = mwc.apps()?;
        emit(json, &apps, || {
          apps
            .iter()
            .map(|a| format!("{:>6}  {}{}", a.pid, a.name, if a.active { "  (active)" } else { "" }))
            .collect::<Vec<_>>()
            .join("\n")
        })
      }
      Commands::Windows { app } => {
        let windows = mwc.windows(&AppQuery::new(app.selector()?))?;
        emit(json, &windows, || {
          windows
            .iter()
            .enumerate()
            .map(|(i, w)| {
              format!(
                "{i}: {:?} {}x{} at ({}, {})",
                w.title.as_deref().unwrap_or(""),
                w.size.width(),
                w.size.height(),
                w.position.x(),
                w.position.y()
              )
            })
            .collect::<Vec<_>>()
            .join("\n")
        })
      }
      Commands::WindowApps => {
        let apps = mwc.window_apps()?;
        emit(json, &apps, || {
          apps
            .iter()
            .map(|a| format!("{:>6}  {} ({} windows)", a.app.pid, a.app.name, a.windows.len()))
            .collect::<Vec<_>>()
            .join("\n")
        })
      }
      Commands::Displays => {
        let displays = mwc.displays()?;
        emit(json, &displays, || {
          displays
            .iter()
            .map(|d| {
              format!(
                "{}{}  {}x{} at ({}, {})  {}",
                d.id,
                if d.main { "*" } else { "" },
                d.size.width(),
                d.size.height(),
                d.position.x(),
                d.position.y(),
                d.name.as_deref().unwrap_or("")
              )
            })
            .collect::<Vec<_>>()
            .join("\n")
        })
      }
      Commands::Resize {
        app,
        width,
        height,
        x,
        y,
      } => {
        let position = x.zip(y).map(|(x, y)| Point::new(x, y));
        let request = SetWindowFrame::new(
          AppWindowQuery::new(app.selector()?),
          Size::new(width, height),
          position,
        );
        mwc.set_window_frame(&request)?;
        Ok(())
      }
      Commands::Activate { app, index, title } => {
        let window = match (index, title) {
          (Some(i), _) => WindowSelector::Index(i),
          (None, Some(t)) => WindowSelector::Title(t),
          (None, None) => WindowSelector::Main,
        };
        mwc.activate_window(&AppWindowQuery::new(app.selector()?).window(window))?;
        Ok(())
      }
      Commands::Inspect { app } => {
        let inspection = mwc.inspect_window(&AppWindowQuery::new(app.selector()?))?;
        // Always JSON; there is no shorter useful form.
        println!("{}", serde_json::to_string_pretty(&inspection)?);
        Ok(())
      }
      Commands::Zoom {
        factor,
        cx,
        cy,
        smooth,
        no_smooth,
      } => {
        let state = match factor {
          None => mwc.zoom(&ZoomQuery::default())?,
          Some(factor) => {
            let mut request = SetZoom::new(factor);
            if let Some(center) = cx.zip(cy) {
              request = request.center(Point::new(center.0, center.1));
            }
            if smooth || no_smooth {
              request = request.smooth(smooth);
            }
            mwc.set_zoom(&request)?
          }
        };
        emit(json, &state, || {
          format!(
            "Zoom: {}\nCenter: ({}, {})\nSmooth: {}",
            state.scale,
            state.center.x(),
            state.center.y(),
            state.smooth
          )
        })
      }
      Commands::Fullscreen { app } => run_fullscreen(&mwc, &app, json),
      Commands::Call { method, args } => {
        let envelope = Bridge::new(mwc).call(&method, &args);
        println!("{envelope}");
        let ok = serde_json::from_str::<serde_json::Value>(&envelope)?["success"] == true;
        if ok {
          Ok(())
        } else {
          Err(CliError::CallFailed { method })
        }
      }
      Commands::Serve { host, port } => serve(mwc, ServerConfig { host, port }),
    }
  }
}

/// Run the server on a background runtime while this thread answers the
/// calls that need AppKit's main thread.
fn serve(mwc: Mwc, config: ServerConfig) -> Result<(), CliError> {
  let (main, queue) = main_thread();
  let bridge = Bridge::new(mwc).on_main_thread(main);
  let runtime = tokio::runtime::Runtime::new()?;
  let server = std::thread::Builder::new()
    .name("mwc-ws".into())
    .spawn(move || {
      let result = runtime.block_on(start_server(bridge, config));
      // Pending requests hold bridge clones; the queue closes once they are gone.
      drop(runtime);
      result
    })?;
  queue.run();
  server.join().map_err(|_| CliError::ServerPanicked)??;
  Ok(())
}

fn run_fullscreen(mwc: &Mwc, app: &AppArg, json: bool) -> Result<(), CliError> {
  let query = AppWindowQuery::new(app.selector()?);
  let screen = mwc.main_display()?.size;
  let menu = mwc.menu_bar_height()?;
  let titlebar = mwc.inspect_window(&query)?.titlebar_height_estimate;
  let plan = fullscreen::plan(screen, menu, titlebar);
  log::info!(
    "resizing to {:?} at {:?}, zooming {} at {:?}",
    plan.window_size,
    plan.window_position,
    plan.zoom,
    plan.zoom_center
  );

  mwc.set_window_frame(&SetWindowFrame::new(
    query,
    plan.window_size,
    Some(plan.window_position),
  ))?;
  let state = mwc.set_zoom(&SetZoom::new(plan.zoom).center(plan.zoom_center))?;
  emit(json, &state, || format!("Zoom: {}", state.scale))
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<(), CliError> {
  if json {
    println!("{}", serde_json::to_string_pretty(value)?);
  } else {
    println!("{}", text());
  }
  Ok(())
}
