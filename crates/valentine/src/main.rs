mod app;

use ::app::BoxError;

fn main() -> Result<(), BoxError> {
    let mut valentine = app::init()?;
    valentine.run();
    Ok(())
}
