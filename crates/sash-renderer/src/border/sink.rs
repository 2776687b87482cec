/// Destination for generated rectangles.
///
/// The generator never owns the accumulation buffer; it only appends
/// through this interface and triggers one submission per frame. Colors
/// are packed `0xRRGGBBAA` integers; 0 is the colorless sentinel value.
pub trait RectSink {
    /// Append one rectangle (or the zero-area sentinel) to the pending batch.
    ///
    /// Implementations must tolerate zero-area rectangles and render them
    /// as a no-op.
    fn accumulate_rect(&mut self, left: f32, top: f32, right: f32, bottom: f32, color: u32);

    /// Flush the pending batch for rendering at the given viewport size and
    /// clear it for the next frame.
    fn submit_rects(&mut self, viewport_width: f32, viewport_height: f32);
}
