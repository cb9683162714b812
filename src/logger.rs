//  ____  ____     __        __      ____
// |  _ \|  _ \ __ \ \      / /__   / ___|  ___  _ __
// | |_) | |_) / _` \ \/\ / / _ \  | |  _  / _ \| '_ \
// |  _ <|  __/ (_| |\ V  V / (_)  | |_| ||  __/| | | |
// |_| \_\_|   \__,_| \_/\_/ \___/  \____| \___||_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-16
// Version : 0.1.0
// License : Mulan PSL v2
//
// Logging setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` overrides the default filter.
pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose { "rpawogen=debug" } else { "rpawogen=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    // 日志输出到 stderr，stdout 只留给密码
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
