//! Plain-text report rendering for analyzed models
//!
//! Values are reported in kN and kN·m; the model stores N and N·m.

use crate::error::FrameResult;
use crate::model::FrameModel;

const N_PER_KN: f64 = 1000.0;

/// Render the section property block for every section in the model
pub fn section_properties(model: &FrameModel) -> String {
    let mut out = String::new();
    let mut names: Vec<&String> = model.sections.keys().collect();
    names.sort();

    for name in names {
        let section = &model.sections[name];
        out += &format!("Section '{}'\n", name);
        if let (Some(width), Some(depth)) = (section.width, section.depth) {
            out += &format!(
                "  {:.0}mm x {:.0}mm\n",
                width * 1000.0,
                depth * 1000.0
            );
        }
        out += &format!("  A  = {:.6} m^2\n", section.a);
        out += &format!("  Iy = {:.6} m^4 (strong axis, vertical bending)\n", section.iy);
        out += &format!("  Iz = {:.6} m^4 (weak axis, horizontal bending)\n", section.iz);
        out += &format!("  J  = {:.6} m^4\n", section.j);
    }

    out
}

/// Render the member end force table for the given members, in order
///
/// Two lines per member (i-node and j-node), each carrying the six local
/// force components evaluated from the internal force fields at x = 0 and
/// x = L.
pub fn member_end_forces(
    model: &FrameModel,
    member_names: &[&str],
    combo_name: &str,
) -> FrameResult<String> {
    let mut out = String::new();
    out += "--- MEMBER END FORCES ---\n\n";
    out += "Format: Member | Node | Axial | Shear_y | Shear_z | Torsion | Moment_y | Moment_z\n";
    out += &format!("{}\n", "-".repeat(100));

    for &name in member_names {
        let internal = model.member_internal_forces(name, combo_name)?;
        let length = internal.length();
        let i_end = internal.at(0.0)?;
        let j_end = internal.at(length)?;

        out += &format!(
            "\n{} (i-node): Ax={:8.2} Vy={:8.2} Vz={:8.2} T={:8.2} My={:8.2} Mz={:8.2}\n",
            name,
            i_end.axial / N_PER_KN,
            i_end.shear_y / N_PER_KN,
            i_end.shear_z / N_PER_KN,
            i_end.torsion / N_PER_KN,
            i_end.moment_y / N_PER_KN,
            i_end.moment_z / N_PER_KN,
        );
        out += &format!(
            "{} (j-node): Ax={:8.2} Vy={:8.2} Vz={:8.2} T={:8.2} My={:8.2} Mz={:8.2}\n",
            name,
            j_end.axial / N_PER_KN,
            j_end.shear_y / N_PER_KN,
            j_end.shear_z / N_PER_KN,
            j_end.torsion / N_PER_KN,
            j_end.moment_y / N_PER_KN,
            j_end.moment_z / N_PER_KN,
        );
    }

    Ok(out)
}

/// Narrative explaining the local axis and moment sign conventions
pub fn moment_conventions_notes() -> &'static str {
    "\
For horizontal beams with gravity load (FY = -10000 N/m):
- Bending occurs in the VERTICAL plane (XY plane for X-beams, YZ plane for Z-beams)
- This is bending about the LOCAL Z-axis (Mz) for the member
- Shear_y (Vy) is the associated shear force

Local axis convention:
- Local x: along member axis (from i-node to j-node)
- Local y: perpendicular, typically in vertical plane with member
- Local z: perpendicular, horizontal for horizontal members

For VERTICAL columns:
- Local x: along member (upward typically)
- Local y: one horizontal direction
- Local z: other horizontal direction

The key is understanding which moment component represents bending in which plane!
"
}

/// Render the max moment summary for the given members, in order
///
/// Each line reports the signed Mz and My of greatest magnitude found by the
/// fixed-resolution scan, plus the member length.
pub fn max_moments(
    model: &FrameModel,
    member_names: &[&str],
    combo_name: &str,
) -> FrameResult<String> {
    let mut out = String::new();
    out += "--- MAX MOMENTS IN BEAMS ---\n";

    for &name in member_names {
        let internal = model.member_internal_forces(name, combo_name)?;
        out += &format!(
            "{}: Max Mz = {:8.2} kNm, Max My = {:8.2} kNm, Length = {:.1}m\n",
            name,
            internal.max_moment_z() / N_PER_KN,
            internal.max_moment_y() / N_PER_KN,
            internal.length(),
        );
    }

    Ok(out)
}

/// Render the full diagnostic report
pub fn full_report(
    model: &FrameModel,
    member_names: &[&str],
    beam_names: &[&str],
    combo_name: &str,
) -> FrameResult<String> {
    let rule = "=".repeat(80);
    let mut out = String::new();

    out += &section_properties(model);
    out += &format!("\n{}\n", rule);
    out += "RESULTS - 3D FRAME ANALYSIS\n";
    out += &format!("{}\n\n", rule);
    out += &member_end_forces(model, member_names, combo_name)?;
    out += &format!("\n{}\n", rule);
    out += "KEY OBSERVATIONS:\n";
    out += &format!("{}\n", rule);
    out += moment_conventions_notes();
    out += "\n";
    out += &max_moments(model, beam_names, combo_name)?;

    Ok(out)
}
