//! AES-CBC for the default provider.

use cbc::cipher::block_padding::{NoPadding, Padding, Pkcs7};
use cbc::cipher::consts::U16;
use cbc::cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit};

use super::{BlockCipherProvider, CbcPadding, RustCrypto};
use crate::core::error::{CipherError, CipherResult};
use crate::core::key::{AesVariant, IV_SIZE};
use crate::core::padding::BLOCK_SIZE;

impl BlockCipherProvider for RustCrypto {
    fn cbc_encrypt(
        &self,
        variant: AesVariant,
        key: &[u8],
        iv: &[u8; IV_SIZE],
        data: &[u8],
        padding: CbcPadding,
    ) -> CipherResult<Vec<u8>> {
        match (variant, padding) {
            (AesVariant::Aes128, CbcPadding::Pkcs7) => encrypt::<aes::Aes128, Pkcs7>(key, iv, data),
            (AesVariant::Aes192, CbcPadding::Pkcs7) => encrypt::<aes::Aes192, Pkcs7>(key, iv, data),
            (AesVariant::Aes256, CbcPadding::Pkcs7) => encrypt::<aes::Aes256, Pkcs7>(key, iv, data),
            (AesVariant::Aes128, CbcPadding::NoPadding) => encrypt::<aes::Aes128, NoPadding>(key, iv, data),
            (AesVariant::Aes192, CbcPadding::NoPadding) => encrypt::<aes::Aes192, NoPadding>(key, iv, data),
            (AesVariant::Aes256, CbcPadding::NoPadding) => encrypt::<aes::Aes256, NoPadding>(key, iv, data),
        }
    }

    fn cbc_decrypt(
        &self,
        variant: AesVariant,
        key: &[u8],
        iv: &[u8; IV_SIZE],
        data: &[u8],
        padding: CbcPadding,
    ) -> CipherResult<Vec<u8>> {
        match (variant, padding) {
            (AesVariant::Aes128, CbcPadding::Pkcs7) => decrypt::<aes::Aes128, Pkcs7>(key, iv, data),
            (AesVariant::Aes192, CbcPadding::Pkcs7) => decrypt::<aes::Aes192, Pkcs7>(key, iv, data),
            (AesVariant::Aes256, CbcPadding::Pkcs7) => decrypt::<aes::Aes256, Pkcs7>(key, iv, data),
            (AesVariant::Aes128, CbcPadding::NoPadding) => decrypt::<aes::Aes128, NoPadding>(key, iv, data),
            (AesVariant::Aes192, CbcPadding::NoPadding) => decrypt::<aes::Aes192, NoPadding>(key, iv, data),
            (AesVariant::Aes256, CbcPadding::NoPadding) => decrypt::<aes::Aes256, NoPadding>(key, iv, data),
        }
    }
}

fn encrypt<C, P>(key: &[u8], iv: &[u8; IV_SIZE], data: &[u8]) -> CipherResult<Vec<u8>>
where
    C: BlockCipher<BlockSize = U16> + BlockEncryptMut + KeyInit,
    P: Padding<U16>,
{
    let cipher = cbc::Encryptor::<C>::new_from_slices(key, iv)
        .map_err(|_| CipherError::ProviderFailure)?;

    let mut out = vec![0u8; data.len() + BLOCK_SIZE];
    let len = cipher
        .encrypt_padded_b2b_mut::<P>(data, &mut out)
        .map_err(|_| CipherError::ProviderFailure)?
        .len();
    out.truncate(len);
    Ok(out)
}

fn decrypt<C, P>(key: &[u8], iv: &[u8; IV_SIZE], data: &[u8]) -> CipherResult<Vec<u8>>
where
    C: BlockCipher<BlockSize = U16> + BlockDecryptMut + KeyInit,
    P: Padding<U16>,
{
    if data.is_empty() || data.len() % BLOCK_SIZE != 0 {
        return Err(CipherError::ProviderFailure);
    }

    let cipher = cbc::Decryptor::<C>::new_from_slices(key, iv)
        .map_err(|_| CipherError::ProviderFailure)?;

    cipher
        .decrypt_padded_vec_mut::<P>(data)
        .map_err(|_| CipherError::ProviderFailure)
}
