//! Excel生成（共通ライブラリ）
//!
//! 絞り込み後の一覧と合計行を1シートに書き出す。

use crate::aggregate::Totals;
use crate::filter::ViewRow;
use crate::types::Field;
use rust_xlsxwriter::*;

const SHEET_NAME: &str = "仕入一覧";
const AMOUNT_LABEL: &str = "金額";
const NUMBER_FORMAT: &str = "#,##0.00";

/// 列幅（文字数）
fn column_width(field: Field) -> f64 {
    match field {
        Field::Date => 12.0,
        Field::ProductName => 24.0,
        f if f.is_numeric() => 12.0,
        _ => 14.0,
    }
}

/// 一覧をExcelバッファに生成
///
/// # Arguments
/// * `rows` - 絞り込み結果
/// * `totals` - `rows` の集計
/// * `title` - 1行目に入れる見出し
pub fn generate_report_buffer(rows: &[ViewRow<'_>], totals: &Totals, title: &str) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    // フォーマット定義
    let title_format = Format::new().set_bold().set_font_size(14.0);

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF0F0F0))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xCCCCCC));

    let text_format = Format::new()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xEEEEEE));

    let number_format = Format::new()
        .set_num_format(NUMBER_FORMAT)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xEEEEEE));

    let total_format = Format::new().set_bold().set_num_format(NUMBER_FORMAT);
    let total_label_format = Format::new().set_bold().set_align(FormatAlign::Right);

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    worksheet
        .write_string_with_format(0, 0, title, &title_format)
        .map_err(|e| format!("見出し書き込みエラー: {}", e))?;

    // 見出し行: 9項目 + 金額
    let header_row: u32 = 2;
    for (col, field) in Field::ALL.iter().enumerate() {
        let col = col as u16;
        worksheet
            .set_column_width(col, column_width(*field))
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
        worksheet
            .write_string_with_format(header_row, col, field.label(), &header_format)
            .map_err(|e| format!("見出し書き込みエラー: {}", e))?;
    }
    let amount_col = Field::ALL.len() as u16;
    worksheet
        .set_column_width(amount_col, 14.0)
        .map_err(|e| format!("列幅設定エラー: {}", e))?;
    worksheet
        .write_string_with_format(header_row, amount_col, AMOUNT_LABEL, &header_format)
        .map_err(|e| format!("見出し書き込みエラー: {}", e))?;

    // 明細行
    let mut current_row = header_row + 1;
    for row in rows {
        let record = row.record;
        for (col, field) in Field::ALL.iter().enumerate() {
            let col = col as u16;
            let written = match field {
                Field::Quantity => worksheet.write_number_with_format(current_row, col, record.quantity, &number_format),
                Field::Price => worksheet.write_number_with_format(current_row, col, record.price, &number_format),
                _ => worksheet.write_string_with_format(current_row, col, &record.value_of(*field), &text_format),
            };
            written.map_err(|e| format!("明細書き込みエラー: {}", e))?;
        }
        worksheet
            .write_number_with_format(current_row, amount_col, record.amount(), &number_format)
            .map_err(|e| format!("明細書き込みエラー: {}", e))?;
        current_row += 1;
    }

    // 合計行
    let total_row = current_row + 1;
    let quantity_col = Field::Quantity.index() as u16;
    worksheet
        .write_string_with_format(total_row, 0, &format!("{}件", totals.count), &total_label_format)
        .map_err(|e| format!("合計書き込みエラー: {}", e))?;
    worksheet
        .write_number_with_format(total_row, quantity_col, totals.total_quantity, &total_format)
        .map_err(|e| format!("合計書き込みエラー: {}", e))?;
    worksheet
        .write_number_with_format(total_row, amount_col, totals.total_amount, &total_format)
        .map_err(|e| format!("合計書き込みエラー: {}", e))?;

    // バッファに書き出し
    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}
