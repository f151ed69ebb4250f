use scraper::{Html, Selector};
use tenki_core::RainInterval;

use super::*;

/// Parses `row` as the only day row of a forecast table and returns the
/// parsed block.
fn parse_row(row: &str) -> DailyForecast {
    let doc = Html::parse_document(&format!("<table><tr class=\"day\">{row}</tr></table>"));
    let selector = Selector::parse("tr.day").unwrap();
    let day = doc.select(&selector).next().expect("fixture row");
    parse_daily_block(day)
}

#[test]
fn full_block_yields_all_three_groups() {
    let got = parse_row(
        "<th>今日</th>\
         <td class=\"info\">くもり\n昼過ぎ から 晴れ</td>\
         <td><table class=\"rain\">\
           <tr><td>06-12</td><td>20%</td></tr>\
           <tr><td>12-18</td><td>10%</td></tr>\
         </table></td>\
         <td><table class=\"temp\">\
           <tr><td class=\"min\">3℃</td></tr>\
           <tr><td class=\"max\">12℃</td></tr>\
         </table></td>",
    );

    assert_eq!(got.forecast.as_deref(), Some("くもり昼過ぎ から 晴れ"));
    assert_eq!(
        got.rain,
        Some(vec![
            RainInterval {
                time: "06-12".to_string(),
                percent: "20%".to_string()
            },
            RainInterval {
                time: "12-18".to_string(),
                percent: "10%".to_string()
            },
        ])
    );
    assert_eq!(
        got.temp,
        Some(Temperature {
            min: Some("3℃".to_string()),
            max: Some("12℃".to_string()),
        })
    );
}

#[test]
fn block_without_any_group_is_empty() {
    let got = parse_row("<th>明後日</th><td>-</td>");
    assert!(got.is_empty(), "expected empty block, got: {got:?}");
}

#[test]
fn empty_forecast_text_is_omitted() {
    let got = parse_row("<td class=\"info\">\n\t</td><td class=\"max\">20</td>");
    assert!(got.forecast.is_none());
    assert_eq!(
        got.temp,
        Some(Temperature {
            min: None,
            max: Some("20".to_string()),
        })
    );
}

#[test]
fn only_present_temperature_key_is_kept() {
    let got = parse_row("<td class=\"min\"></td><td class=\"max\">18℃</td>");
    let temp = got.temp.expect("temp group");
    assert!(temp.min.is_none());
    assert_eq!(temp.max.as_deref(), Some("18℃"));
}

#[test]
fn rain_table_with_only_placeholders_is_omitted() {
    let got = parse_row(
        "<td class=\"info\">晴れ</td>\
         <td><table class=\"rain\"><tr><td>00-06</td><td>--%</td></tr></table></td>",
    );
    assert_eq!(got.forecast.as_deref(), Some("晴れ"));
    assert!(got.rain.is_none());
    assert!(got.temp.is_none());
}
