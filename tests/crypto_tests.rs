use aes::cipher::KeyIvInit;
use aes::Aes128;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use cbc::cipher::block_padding::Pkcs7;
use cbc::Encryptor;
use wechat_mp_decrypt::crypto::pkcs7;
use wechat_mp_decrypt::crypto::{
    decrypt_bytes, decrypt_mobile, decrypt_payload, decrypt_share_info, encrypt_payload,
};
use wechat_mp_decrypt::{DecryptError, PayloadKind};

type Aes128CbcEnc = Encryptor<Aes128>;

fn encrypt_aes_128_cbc(key: &[u8; 16], iv: &[u8; 16], plaintext: &[u8]) -> Vec<u8> {
    use aes::cipher::BlockEncryptMut;

    Aes128CbcEnc::new(key.into(), iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

fn encrypt_b64(key: &[u8; 16], iv: &[u8; 16], plaintext: &str) -> (String, String, String) {
    let encrypted = encrypt_aes_128_cbc(key, iv, plaintext.as_bytes());
    (
        BASE64.encode(key),
        BASE64.encode(&encrypted),
        BASE64.encode(iv),
    )
}

#[test]
fn test_invalid_base64_encrypted_data() {
    let result = decrypt_bytes(
        "MTIzNDU2Nzg5MDEyMzQ1Ng==",
        "not-valid!!!",
        "MTIzNDU2Nzg5MDEyMzQ1Ng==",
    );
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Invalid base64 in encrypted_data"));
}

#[test]
fn test_invalid_base64_iv() {
    let result = decrypt_bytes(
        "MTIzNDU2Nzg5MDEyMzQ1Ng==",
        "MTIzNDU2Nzg5MDEyMzQ1Ng==",
        "not-valid!!!",
    );
    assert!(matches!(
        result,
        Err(DecryptError::Encoding { field: "iv", .. })
    ));
}

#[test]
fn test_invalid_key_length() {
    // "123456789" is 9 bytes
    let result = decrypt_bytes(
        "MTIzNDU2Nzg5",
        "MTIzNDU2Nzg5MDEyMzQ1Ng==",
        "MTIzNDU2Nzg5MDEyMzQ1Ng==",
    );
    assert!(matches!(result, Err(DecryptError::InvalidKey { len: 9 })));
}

#[test]
fn test_aes_192_and_256_keys_rejected() {
    let iv = BASE64.encode([0u8; 16]);
    let data = BASE64.encode([0u8; 16]);
    for len in [24usize, 32] {
        let key = BASE64.encode(vec![1u8; len]);
        let result = decrypt_bytes(&key, &data, &iv);
        assert!(matches!(result, Err(DecryptError::InvalidKey { len: got }) if got == len));
    }
}

#[test]
fn test_invalid_iv_length() {
    let result = decrypt_bytes(
        "MTIzNDU2Nzg5MDEyMzQ1Ng==",
        "MTIzNDU2Nzg5MDEyMzQ1Ng==",
        "MTIzNDU2",
    );
    assert!(matches!(result, Err(DecryptError::InvalidIv { len: 6 })));
}

#[test]
fn test_empty_encrypted_data() {
    let result = decrypt_bytes("MTIzNDU2Nzg5MDEyMzQ1Ng==", "", "MTIzNDU2Nzg5MDEyMzQ1Ng==");
    assert!(matches!(
        result,
        Err(DecryptError::InvalidCiphertextLength { len: 0 })
    ));
}

#[test]
fn test_unaligned_encrypted_data() {
    let data = BASE64.encode([0u8; 17]);
    let result = decrypt_bytes("MTIzNDU2Nzg5MDEyMzQ1Ng==", &data, "MTIzNDU2Nzg5MDEyMzQ1Ng==");
    assert!(matches!(
        result,
        Err(DecryptError::InvalidCiphertextLength { len: 17 })
    ));
}

#[test]
fn test_round_trip_block_aligned_plaintexts() {
    let key = b"key123456789012a";
    let iv = b"iv12345678901234";

    for blocks in 1..=4 {
        let plaintext: Vec<u8> = (0..blocks * 16).map(|i| (i * 7 % 251) as u8).collect();
        let mut padded = plaintext.clone();
        padded.extend([16u8; 16]);

        let encrypted = encrypt_aes_128_cbc(key, iv, &plaintext);
        assert_eq!(encrypted.len(), padded.len());

        let decrypted = decrypt_bytes(
            &BASE64.encode(key),
            &BASE64.encode(&encrypted),
            &BASE64.encode(iv),
        )
        .unwrap();
        assert_eq!(decrypted.as_slice(), plaintext.as_slice());
    }
}

#[test]
fn test_encrypt_payload_matches_reference_encryptor() {
    let key = b"sessionkey123456";
    let iv = b"initialvec123456";
    let plaintext = br#"{"openGId":"GID"}"#;

    let ours = encrypt_payload(&BASE64.encode(key), plaintext, &BASE64.encode(iv)).unwrap();
    let reference = BASE64.encode(encrypt_aes_128_cbc(key, iv, plaintext));
    assert_eq!(ours, reference);
}

#[test]
fn test_wrong_key_is_rejected() {
    let iv = b"initialvec123456";
    let plaintext = r#"{"phoneNumber":"13800138000","purePhoneNumber":"13800138000","countryCode":"86","watermark":{"appid":"wxabc","timestamp":1600000000}}"#;
    let (_, encrypted, iv_b64) = encrypt_b64(b"sessionkey123456", iv, plaintext);

    for i in 0u8..32 {
        let mut wrong_key = *b"wrongkey00000000";
        wrong_key[15] = i;
        let result = decrypt_mobile(&BASE64.encode(wrong_key), &encrypted, &iv_b64);
        match result {
            Err(DecryptError::InvalidPadding) | Err(DecryptError::MalformedPayload(_)) => {}
            other => panic!("wrong key must not decrypt, got {:?}", other),
        }
    }
}

#[test]
fn test_decrypt_is_idempotent() {
    let (key, data, iv) = encrypt_b64(
        b"sessionkey123456",
        b"initialvec123456",
        r#"{"openGId":"GID"}"#,
    );
    let first = decrypt_share_info(&key, &data, &iv).unwrap();
    let second = decrypt_share_info(&key, &data, &iv).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_short_buffer_with_0x10_padding_byte() {
    let data = [b'a', b'b', 0x10];
    assert!(matches!(
        pkcs7::unpad(&data),
        Err(DecryptError::InvalidPadding)
    ));
}

#[test]
fn test_end_to_end_with_special_chars() {
    let plaintext = r#"{"openGId":"群组-用户昵称","watermark":{"timestamp":1609459200,"appid":"wxaabbccddeefff"}}"#;
    let (key, data, iv) = encrypt_b64(b"key123456789012a", b"iv12345678901234", plaintext);

    let info = decrypt_share_info(&key, &data, &iv).unwrap();
    assert_eq!(info.open_gid, "群组-用户昵称");
}

#[test]
fn test_end_to_end_two_blocks_raw_bytes() {
    let plaintext = r#"{"data":"This is a much longer string that exceeds one AES block size of 16 bytes for testing"}"#;
    let (key, data, iv) = encrypt_b64(b"twoblocktestkey1", b"twoblocktestivv1", plaintext);

    let decrypted = decrypt_bytes(&key, &data, &iv).unwrap();
    assert_eq!(decrypted.as_slice(), plaintext.as_bytes());
}

#[test]
fn test_payload_not_json() {
    let (key, data, iv) = encrypt_b64(b"1234567890123456", b"abcdefghijklmnop", "plain text");
    let result = decrypt_payload(PayloadKind::ShareInfo, &key, &data, &iv);
    assert!(matches!(result, Err(DecryptError::MalformedPayload(_))));
}

#[test]
fn test_payload_missing_required_field() {
    let plaintext = r#"{"phoneNumber":"13800138000","watermark":{"timestamp":1,"appid":"wx"}}"#;
    let (key, data, iv) = encrypt_b64(b"1234567890123456", b"abcdefghijklmnop", plaintext);
    let result = decrypt_mobile(&key, &data, &iv);
    assert!(matches!(result, Err(DecryptError::MalformedPayload(_))));
}
