// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#443
//
// Entries are always stored, so every archive is extractable by a 2.0 reader.
pub const NEEDED_TO_EXTRACT: u16 = 20;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#442
//
// Upper byte 0 (MS-DOS host attributes), lower byte 20 (specification version 2.0).
pub const MADE_BY: u16 = 20;
