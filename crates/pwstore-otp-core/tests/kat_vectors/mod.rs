mod hotp;
mod steam;
mod totp;
