//! HTML rendering module
//!
//! Pure string composition: every function returns a complete HTML document
//! for the caller to pair with a status code. Record values are inserted
//! verbatim; nothing here escapes markup. The values come from host
//! introspection, never from request input.

use crate::collector::InfoRecord;

/// Stylesheet embedded in every table page
const TABLE_PAGE_STYLE: &str = r"
        body {
            font-family: Arial, sans-serif;
            padding: 20px;
            background: #f5f7fa;
        }
        h1 {
            color: #2c3e50;
        }
        table {
            width: 60%;
            border-collapse: collapse;
            margin-top: 20px;
        }
        td {
            border: 1px solid #ddd;
            padding: 10px;
        }
        tr:nth-child(even) {
            background-color: #f2f2f2;
        }
";

/// Render an info record as a titled table page
///
/// One `<tr>` per record entry, in insertion order, with a back-link to `/`.
pub fn table_page(record: &InfoRecord, title: &str) -> String {
    let mut rows = String::with_capacity(record.len() * 48);
    for (label, value) in record.iter() {
        rows.push_str(&format!(
            "        <tr><td>{label}</td><td>{value}</td></tr>\n"
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>{TABLE_PAGE_STYLE}    </style>
</head>
<body>
    <h1>{title}</h1>
    <table>
{rows}    </table>
    <br><a href="/">Back to Home</a>
</body>
</html>
"#
    )
}

/// The static home page, linking to the two table pages
pub fn home_page() -> String {
    String::from(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Sysview Server Home</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            text-align: center;
            padding: 50px;
            background: linear-gradient(to right, #6dd5ed, #2187b0);
            color: white;
        }
        .links {
            margin-top: 30px;
        }
        a {
            display: inline-block;
            margin: 10px;
            padding: 12px 25px;
            background: #ffffff;
            color: #3ba8c4;
            border-radius: 6px;
            text-decoration: none;
            font-weight: bold;
        }
        a:hover {
            background: #eeeeee;
        }
    </style>
</head>
<body>
    <h1>Welcome to the Sysview Server</h1>
    <p>Explore system info and path details using the links below.</p>
    <div class="links">
        <a href="/os">View OS Info</a>
        <a href="/path">View Path Info</a>
    </div>
</body>
</html>
"#,
    )
}

/// The fixed not-found page
pub fn not_found_page() -> String {
    String::from(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>404 - Page Not Found</title>
</head>
<body>
    <h1>404 - Page Not Found</h1>
    <p><a href="/">Go Home</a></p>
</body>
</html>
"#,
    )
}
