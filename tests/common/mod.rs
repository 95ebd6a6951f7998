use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;
use zip::write::FileOptions;
use zip::ZipWriter;

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub struct Fixture {
    _tmp: TempDir,
    pub dir: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().to_path_buf();
        Self { _tmp: tmp, dir }
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    /// Yearly anomaly file in the Land-Ocean Temperature Index layout.
    pub fn yearly_csv(&self) -> PathBuf {
        self.write(
            "land_ocean.csv",
            "Year,No_Smoothing,Lowess(5)\n2000,0.1,0.38\n2001,0.2,0.40\n2002,0.15,0.42\n",
        )
    }

    /// Monthly anomaly file in the GISTEMP layout: one title line before the
    /// header and `***` for months not yet reported.
    pub fn monthly_csv(&self) -> PathBuf {
        let mut text = String::from("Land-Ocean: Global Means\n");
        text.push_str("Year,");
        text.push_str(&MONTHS.join(","));
        text.push_str(",J-D\n");
        for (i, year) in [1880, 1881, 1882, 1883].iter().enumerate() {
            let values: Vec<String> = (0..12)
                .map(|m| format!("{:.2}", (m as f64 - 6.0) / 10.0 + i as f64 / 100.0))
                .collect();
            text.push_str(&format!("{},{},0.00\n", year, values.join(",")));
        }
        let mut partial = vec!["0.90".to_string(); 6];
        partial.extend(vec!["***".to_string(); 6]);
        text.push_str(&format!("1884,{},***\n", partial.join(",")));
        self.write("GLB.Ts+dSST.csv", &text)
    }

    /// Single-sheet workbook; the first row is the header, numeric cells
    /// are written as numbers and everything else as inline strings.
    pub fn workbook(&self, name: &str, rows: &[Vec<&str>]) -> PathBuf {
        let path = self.dir.join(name);
        let file = fs::File::create(&path).expect("create workbook");
        let mut zip = ZipWriter::new(file);
        let parts = [
            ("[Content_Types].xml", CONTENT_TYPES.to_string()),
            ("_rels/.rels", ROOT_RELS.to_string()),
            ("xl/workbook.xml", WORKBOOK.to_string()),
            ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS.to_string()),
            ("xl/worksheets/sheet1.xml", sheet_xml(rows)),
        ];
        for (part, xml) in parts {
            zip.start_file(part, FileOptions::default())
                .expect("start workbook part");
            zip.write_all(xml.as_bytes()).expect("write workbook part");
        }
        zip.finish().expect("finish workbook");
        path
    }

    /// The yearly anomaly table as an `.xlsx` workbook.
    pub fn yearly_xlsx(&self) -> PathBuf {
        self.workbook(
            "land_ocean.xlsx",
            &[
                vec!["Year", "No_Smoothing", "Lowess(5)"],
                vec!["2000", "0.1", "0.38"],
                vec!["2001", "0.2", "0.40"],
                vec!["2002", "0.15", "0.42"],
            ],
        )
    }
}

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
<sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets>
</workbook>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
</Relationships>"#;

fn column_letter(index: usize) -> char {
    (b'A' + index as u8) as char
}

fn sheet_xml(rows: &[Vec<&str>]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    for (r, row) in rows.iter().enumerate() {
        xml.push_str(&format!(r#"<row r="{}">"#, r + 1));
        for (c, value) in row.iter().enumerate() {
            let cell = format!("{}{}", column_letter(c), r + 1);
            if value.parse::<f64>().is_ok() {
                xml.push_str(&format!(r#"<c r="{}"><v>{}</v></c>"#, cell, value));
            } else {
                xml.push_str(&format!(
                    r#"<c r="{}" t="inlineStr"><is><t>{}</t></is></c>"#,
                    cell, value
                ));
            }
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}
