use std::time::Duration;

/// Outcome of one batch input file.
#[derive(Debug, Clone)]
pub struct FileStat {
    pub file: String,
    pub device_name: String,
    pub parser: String,
    pub rows: usize,
    pub error: Option<String>,
}

impl FileStat {
    pub fn is_processed(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug)]
pub struct BatchStats {
    pub files_seen: usize,
    pub files_processed: usize,
    pub files_skipped: usize,
    pub total_rows: usize,
    pub total_duration: Duration,
    pub file_stats: Vec<FileStat>,
}

impl Default for BatchStats {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchStats {
    pub fn new() -> Self {
        Self {
            files_seen: 0,
            files_processed: 0,
            files_skipped: 0,
            total_rows: 0,
            total_duration: Duration::from_secs(0),
            file_stats: Vec::new(),
        }
    }

    pub fn add_file(&mut self, stat: FileStat) {
        self.files_seen += 1;
        if stat.is_processed() {
            self.files_processed += 1;
            self.total_rows += stat.rows;
        } else {
            self.files_skipped += 1;
        }
        self.file_stats.push(stat);
    }

    pub fn success_rate(&self) -> f64 {
        if self.files_seen == 0 {
            0.0
        } else {
            (self.files_processed as f64 / self.files_seen as f64) * 100.0
        }
    }
}
