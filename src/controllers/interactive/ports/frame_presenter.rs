use crate::controllers::interactive::data::frame::Frame;

pub trait FramePresenterPort {
    type Error: std::error::Error + Send + Sync + 'static;

    fn present(&mut self, frame: &Frame<'_>) -> Result<(), Self::Error>;
}
