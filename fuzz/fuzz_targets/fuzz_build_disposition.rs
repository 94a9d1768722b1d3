#![no_main]

use form_disposition::{ContentDisposition, Error};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let split = data.iter().position(|&b| b == 0).unwrap_or(data.len());
    let name = &data[..split];
    let file_name = data.get(split + 1..);

    match ContentDisposition::build(name, file_name, true) {
        Ok(disposition) => {
            assert_eq!(disposition.params().len(), if file_name.is_some() { 2 } else { 1 });
            assert!(disposition.to_header_value().is_ok());
        }
        Err(Error::EncodingFailed { value }) => {
            assert!(value == name || Some(&value[..]) == file_name);
        }
        Err(err) => panic!("unexpected error: {}", err),
    }

    let raw = ContentDisposition::build(name, file_name, false).expect("raw build never fails");
    assert_eq!(raw.name(), name);
    assert_eq!(raw.file_name(), file_name);
});
