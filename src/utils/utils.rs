use std::io;
use std::time::{Duration, Instant};
use indicatif::{ProgressBar, ProgressStyle};

/// 初始化 env_logger，重複呼叫不會出錯
pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };
    if env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init()
        .is_err()
    {
        log::debug!("日誌已初始化，略過");
    }
    Ok(())
}

pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
    start: Instant,
}

impl ProgressManager {
    pub fn new(message: String, no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner} {msg} [{elapsed}]")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        };
        pb.set_message(message);
        ProgressManager {
            pb,
            no_progress,
            start: Instant::now(),
        }
    }

    pub fn finish(&self) {
        if !self.no_progress {
            self.pb.finish_and_clear();
        }
        log::debug!("轉換耗時 {:.3} 秒", self.start.elapsed().as_secs_f64());
    }
}
