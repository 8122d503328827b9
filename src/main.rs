fn main() {
    console_error_panic_hook::set_once();
    lightbox_gallery_ui::start();
}
