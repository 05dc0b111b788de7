use crate::domain::ScheduleEntry;
use crate::errors::ServerError;
use rust_xlsxwriter::{Format, Workbook};

const HEADERS: [&str; 8] = [
    "Unit",
    "Date",
    "Time Slot",
    "Status",
    "Reschedule Requested",
    "Resident",
    "Contact",
    "Notes",
];

/// Build a workbook with one row per entry, in the order given.
pub fn schedule_workbook(
    entries: &[&ScheduleEntry],
    sheet_name: &str,
) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    let bold = Format::new().set_bold();
    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }

    for (i, entry) in entries.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet.write_string(r, 0, entry.unit_id.as_str())?;
        worksheet.write_string(r, 1, entry.scheduled_date.format("%Y-%m-%d").to_string())?;
        worksheet.write_string(r, 2, entry.time_slot.label())?;
        worksheet.write_string(r, 3, entry.status.label())?;
        worksheet.write_string(r, 4, if entry.reschedule_requested { "Yes" } else { "No" })?;
        worksheet.write_string(r, 5, &entry.resident_name)?;
        worksheet.write_string(r, 6, &entry.resident_contact)?;
        worksheet.write_string(r, 7, &entry.notes)?;
    }

    worksheet.autofit();

    Ok(workbook.save_to_buffer()?)
}
