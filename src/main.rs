use metricdash::error::AppResult;

fn main() -> AppResult<()> {
    metricdash::entry::run()
}
