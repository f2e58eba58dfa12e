use gtk4 as gtk;
use gtk4::prelude::*;
use mini_chart::SparklineConfig;
use mini_chart::core::Padding;
use mini_chart::platform_gtk::GtkSparkline;

fn main() {
    let _ = mini_chart::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.mini_chart.demos.gtk_sparkline")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &gtk::Application) {
    let config = SparklineConfig::new(240.0, 60.0).with_padding(Padding::Percent(20.0));
    let series = vec![12.0, 18.0, 9.0, 22.0, 30.0, 26.0, 14.0, 19.0, 27.0, 24.0];

    let sparkline = match GtkSparkline::new(config, series) {
        Ok(sparkline) => sparkline,
        Err(err) => {
            eprintln!("failed to initialize sparkline: {err}");
            return;
        }
    };

    let status = gtk::Label::new(Some("hover the line"));
    status.set_xalign(0.0);

    let root = gtk::Box::new(gtk::Orientation::Vertical, 8);
    root.set_margin_top(24);
    root.set_margin_bottom(12);
    root.set_margin_start(12);
    root.set_margin_end(12);
    root.append(sparkline.widget());
    root.append(&status);

    let motion = gtk::EventControllerMotion::new();
    let shared = sparkline.sparkline();
    let motion_status = status.clone();
    motion.connect_motion(move |_controller, _x, _y| {
        let text = match shared.borrow().active_point() {
            Some(active) => format!("#{} = {}", active.index, active.value),
            None => "hover the line".to_owned(),
        };
        motion_status.set_text(&text);
    });
    sparkline.widget().add_controller(motion);

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("mini-chart-rs sparkline")
        .default_width(280)
        .default_height(140)
        .child(&root)
        .build();
    window.present();
}
