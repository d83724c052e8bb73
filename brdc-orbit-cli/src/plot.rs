//! 3D trajectory rendering
use plotly::{
    common::{HoverInfo, Mode, Title},
    layout::{Axis, LayoutScene},
    Layout, Plot, Scatter3D,
};

use brdc_orbit::prelude::{Epoch, Trajectory};

/*
 * Builds one 3D chart per trajectory, coordinates in km
 */
fn build_3d_chart_epoch_label(trajectory: &Trajectory) -> Box<Scatter3D<f64, f64, f64>> {
    let txt: Vec<String> = trajectory.epochs.iter().map(Epoch::to_string).collect();
    let x: Vec<f64> = trajectory.positions.x.iter().map(|x| x / 1.0E3).collect();
    let y: Vec<f64> = trajectory.positions.y.iter().map(|y| y / 1.0E3).collect();
    let z: Vec<f64> = trajectory.positions.z.iter().map(|z| z / 1.0E3).collect();
    Scatter3D::new(x, y, z)
        .mode(Mode::LinesMarkers)
        .name(&trajectory.sv.to_string())
        .hover_text_array(txt)
        .hover_info(HoverInfo::All)
}

/// Renders all trajectories into a single 3D plot.
pub fn plot_trajectories(trajectories: &[Trajectory]) -> Plot {
    let mut plot = Plot::new();
    let layout = Layout::new()
        .title(Title::from("ECEF trajectories"))
        .scene(
            LayoutScene::new()
                .x_axis(Axis::new().title(Title::from("x (km)")))
                .y_axis(Axis::new().title(Title::from("y (km)")))
                .z_axis(Axis::new().title(Title::from("z (km)"))),
        );
    plot.set_layout(layout);
    for trajectory in trajectories.iter() {
        plot.add_trace(build_3d_chart_epoch_label(trajectory));
    }
    plot
}
