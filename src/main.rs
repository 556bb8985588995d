use std::io;

use binary_translator::action::cli::process_args;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let code = process_args(args)?;
    log::info!("程式執行完成，結束碼：{}", code);
    std::process::exit(code);
}
