// Example reports shared by the unit tests

use serde_json::{json, Value};

use crate::report::ReceptionReport;

/// Two PSKReporter reception reports that validate
pub fn example_reports() -> Vec<Value> {
    vec![
        json!({
            "timestamp": "2019-06-03T20:31:15Z",
            "freqHz": 7079110,
            "sNR": -13,
            "rxCall": "SM6FMB",
            "rxGrid": "JO57vo28",
            "txCall": "OH8STN",
            "txGrid": "KP25QC92LD",
            "srcType": "PSKReporter",
            "srcData": {
                "receiverCallsign": "SM6FMB",
                "receiverLocator": "JO57vo28",
                "senderCallsign": "OH8STN",
                "senderLocator": "KP25QC92LD",
                "frequencyHz": 7079110,
                "flowStartSeconds": "1556281995",
                "mode": "JS8",
                "senderDXCC": "Finland",
                "senderDXCCCode": "OH",
                "senderDXCCLocator": "KP33",
                "senderEqslAuthGuar": "A",
                "sNRString": "-13",
                "sNR": -13
            }
        }),
        json!({
            "timestamp": "2019-06-03T20:31:30Z",
            "freqHz": 7079485,
            "sNR": null,
            "rxCall": "WB0SIO",
            "rxGrid": "EN24WS05SK",
            "txCall": "K4WLO",
            "txGrid": "EM65WM",
            "reportedBy": "N0JUH",
            "srcType": "PSKReporter",
            "srcData": {
                "receiverCallsign": "WB0SIO",
                "receiverLocator": "EN24WS05SK",
                "senderCallsign": "K4WLO",
                "senderLocator": "EM65WM",
                "frequencyHz": 7079485,
                "flowStartSeconds": "1556281965",
                "mode": "JS8",
                "senderDXCC": "United States",
                "senderDXCCCode": "K",
                "senderDXCCLocator": "EM47",
                "sNRString": "xyz",
                "sNR": null
            }
        }),
    ]
}

/// Report with no band, no key and no sNR value
pub fn key_report() -> ReceptionReport {
    ReceptionReport {
        timestamp: "2019-06-03T20:31:30Z".to_string(),
        freq_hz: 7_079_485,
        rx_call: "WB0SIO".to_string(),
        rx_grid: "EN24WS05SK".to_string(),
        tx_call: "K4WLO".to_string(),
        tx_grid: "EM65WM".to_string(),
        reported_by: Some("N0JUH".to_string()),
        src_type: Some("PSKReporter".to_string()),
        ..Default::default()
    }
}
