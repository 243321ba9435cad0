// Generated by gen_properties from LineBreak.txt and UnicodeData.txt.
// Unicode text segmentation property dictionary; do not edit by hand.

use crate::properties::Dictionary;
use crate::properties::GeneralCategory as G;
use crate::properties::LineProperty as L;

pub(crate) static LINE_BREAK: Dictionary<(L, G)> = Dictionary(&[
    (0x0000, 0x0008, (L::Cm, G::Cc)),
    (0x0009, 0x0009, (L::Ba, G::Cc)),
    (0x000A, 0x000A, (L::Lf, G::Cc)),
    (0x000B, 0x000C, (L::Bk, G::Cc)),
    (0x000D, 0x000D, (L::Cr, G::Cc)),
    (0x000E, 0x001F, (L::Cm, G::Cc)),
    (0x0020, 0x0020, (L::Sp, G::Zs)),
    (0x0021, 0x0021, (L::Ex, G::Po)),
    (0x0022, 0x0022, (L::Qu, G::Po)),
    (0x0023, 0x0023, (L::Al, G::Po)),
    (0x0024, 0x0024, (L::Pr, G::Sc)),
    (0x0025, 0x0025, (L::Po, G::Po)),
    (0x0026, 0x0026, (L::Al, G::Po)),
    (0x0027, 0x0027, (L::Qu, G::Po)),
    (0x0028, 0x0028, (L::Op, G::Ps)),
    (0x0029, 0x0029, (L::Cp, G::Pe)),
    (0x002A, 0x002A, (L::Al, G::Po)),
    (0x002B, 0x002B, (L::Pr, G::Sm)),
    (0x002C, 0x002C, (L::Is, G::Po)),
    (0x002D, 0x002D, (L::Hy, G::Pd)),
    (0x002E, 0x002E, (L::Is, G::Po)),
    (0x002F, 0x002F, (L::Sy, G::Po)),
    (0x0030, 0x0039, (L::Nu, G::Nd)),
    (0x003A, 0x003B, (L::Is, G::Po)),
    (0x003C, 0x003E, (L::Al, G::Sm)),
    (0x003F, 0x003F, (L::Ex, G::Po)),
    (0x0040, 0x0040, (L::Al, G::Po)),
    (0x0041, 0x005A, (L::Al, G::Lu)),
    (0x005B, 0x005B, (L::Op, G::Ps)),
    (0x005C, 0x005C, (L::Pr, G::Po)),
    (0x005D, 0x005D, (L::Cp, G::Pe)),
    (0x005E, 0x005E, (L::Al, G::Sk)),
    (0x005F, 0x005F, (L::Al, G::Pc)),
    (0x0060, 0x0060, (L::Al, G::Sk)),
    (0x0061, 0x007A, (L::Al, G::Ll)),
    (0x007B, 0x007B, (L::Op, G::Ps)),
    (0x007C, 0x007C, (L::Ba, G::Sm)),
    (0x007D, 0x007D, (L::Cl, G::Pe)),
    (0x007E, 0x007E, (L::Al, G::Sm)),
    (0x007F, 0x0084, (L::Cm, G::Cc)),
    (0x0085, 0x0085, (L::Nl, G::Cc)),
    (0x0086, 0x009F, (L::Cm, G::Cc)),
    (0x00A0, 0x00A0, (L::Gl, G::Zs)),
    (0x00A1, 0x00A1, (L::Op, G::Po)),
    (0x00A2, 0x00A2, (L::Po, G::Sc)),
    (0x00A3, 0x00A5, (L::Pr, G::Sc)),
    (0x00A6, 0x00A6, (L::Al, G::So)),
    (0x00A7, 0x00A7, (L::Ai, G::Po)),
    (0x00A8, 0x00A8, (L::Ai, G::Sk)),
    (0x00A9, 0x00A9, (L::Al, G::So)),
    (0x00AA, 0x00AA, (L::Ai, G::Lo)),
    (0x00AB, 0x00AB, (L::Qu, G::Pi)),
    (0x00AC, 0x00AC, (L::Al, G::Sm)),
    (0x00AD, 0x00AD, (L::Ba, G::Cf)),
    (0x00AE, 0x00AE, (L::Al, G::So)),
    (0x00AF, 0x00AF, (L::Al, G::Sk)),
    (0x00B0, 0x00B0, (L::Po, G::So)),
    (0x00B1, 0x00B1, (L::Pr, G::Sm)),
    (0x00B2, 0x00B3, (L::Ai, G::No)),
    (0x00B4, 0x00B4, (L::Bb, G::Sk)),
    (0x00B5, 0x00B5, (L::Al, G::Ll)),
    (0x00B6, 0x00B7, (L::Ai, G::Po)),
    (0x00B8, 0x00B8, (L::Ai, G::Sk)),
    (0x00B9, 0x00B9, (L::Ai, G::No)),
    (0x00BA, 0x00BA, (L::Ai, G::Lo)),
    (0x00BB, 0x00BB, (L::Qu, G::Pf)),
    (0x00BC, 0x00BE, (L::Ai, G::No)),
    (0x00BF, 0x00BF, (L::Op, G::Po)),
    (0x00C0, 0x00D6, (L::Al, G::Lu)),
    (0x00D7, 0x00D7, (L::Ai, G::Sm)),
    (0x00D8, 0x00DE, (L::Al, G::Lu)),
    (0x00DF, 0x00F6, (L::Al, G::Ll)),
    (0x00F7, 0x00F7, (L::Ai, G::Sm)),
    (0x00F8, 0x00FF, (L::Al, G::Ll)),
    (0x0100, 0x0100, (L::Al, G::Lu)),
    (0x0101, 0x0101, (L::Al, G::Ll)),
    (0x0102, 0x0102, (L::Al, G::Lu)),
    (0x0103, 0x0103, (L::Al, G::Ll)),
    (0x0104, 0x0104, (L::Al, G::Lu)),
    (0x0105, 0x0105, (L::Al, G::Ll)),
    (0x0106, 0x0106, (L::Al, G::Lu)),
    (0x0107, 0x0107, (L::Al, G::Ll)),
    (0x0108, 0x0108, (L::Al, G::Lu)),
    (0x0109, 0x0109, (L::Al, G::Ll)),
    (0x010A, 0x010A, (L::Al, G::Lu)),
    (0x010B, 0x010B, (L::Al, G::Ll)),
    (0x010C, 0x010C, (L::Al, G::Lu)),
    (0x010D, 0x010D, (L::Al, G::Ll)),
    (0x010E, 0x010E, (L::Al, G::Lu)),
    (0x010F, 0x010F, (L::Al, G::Ll)),
    (0x0110, 0x0110, (L::Al, G::Lu)),
    (0x0111, 0x0111, (L::Al, G::Ll)),
    (0x0112, 0x0112, (L::Al, G::Lu)),
    (0x0113, 0x0113, (L::Al, G::Ll)),
    (0x0114, 0x0114, (L::Al, G::Lu)),
    (0x0115, 0x0115, (L::Al, G::Ll)),
    (0x0116, 0x0116, (L::Al, G::Lu)),
    (0x0117, 0x0117, (L::Al, G::Ll)),
    (0x0118, 0x0118, (L::Al, G::Lu)),
    (0x0119, 0x0119, (L::Al, G::Ll)),
    (0x011A, 0x011A, (L::Al, G::Lu)),
    (0x011B, 0x011B, (L::Al, G::Ll)),
    (0x011C, 0x011C, (L::Al, G::Lu)),
    (0x011D, 0x011D, (L::Al, G::Ll)),
    (0x011E, 0x011E, (L::Al, G::Lu)),
    (0x011F, 0x011F, (L::Al, G::Ll)),
    (0x0120, 0x0120, (L::Al, G::Lu)),
    (0x0121, 0x0121, (L::Al, G::Ll)),
    (0x0122, 0x0122, (L::Al, G::Lu)),
    (0x0123, 0x0123, (L::Al, G::Ll)),
    (0x0124, 0x0124, (L::Al, G::Lu)),
    (0x0125, 0x0125, (L::Al, G::Ll)),
    (0x0126, 0x0126, (L::Al, G::Lu)),
    (0x0127, 0x0127, (L::Al, G::Ll)),
    (0x0128, 0x0128, (L::Al, G::Lu)),
    (0x0129, 0x0129, (L::Al, G::Ll)),
    (0x012A, 0x012A, (L::Al, G::Lu)),
    (0x012B, 0x012B, (L::Al, G::Ll)),
    (0x012C, 0x012C, (L::Al, G::Lu)),
    (0x012D, 0x012D, (L::Al, G::Ll)),
    (0x012E, 0x012E, (L::Al, G::Lu)),
    (0x012F, 0x012F, (L::Al, G::Ll)),
    (0x0130, 0x0130, (L::Al, G::Lu)),
    (0x0131, 0x0131, (L::Al, G::Ll)),
    (0x0132, 0x0132, (L::Al, G::Lu)),
    (0x0133, 0x0133, (L::Al, G::Ll)),
    (0x0134, 0x0134, (L::Al, G::Lu)),
    (0x0135, 0x0135, (L::Al, G::Ll)),
    (0x0136, 0x0136, (L::Al, G::Lu)),
    (0x0137, 0x0138, (L::Al, G::Ll)),
    (0x0139, 0x0139, (L::Al, G::Lu)),
    (0x013A, 0x013A, (L::Al, G::Ll)),
    (0x013B, 0x013B, (L::Al, G::Lu)),
    (0x013C, 0x013C, (L::Al, G::Ll)),
    (0x013D, 0x013D, (L::Al, G::Lu)),
    (0x013E, 0x013E, (L::Al, G::Ll)),
    (0x013F, 0x013F, (L::Al, G::Lu)),
    (0x0140, 0x0140, (L::Al, G::Ll)),
    (0x0141, 0x0141, (L::Al, G::Lu)),
    (0x0142, 0x0142, (L::Al, G::Ll)),
    (0x0143, 0x0143, (L::Al, G::Lu)),
    (0x0144, 0x0144, (L::Al, G::Ll)),
    (0x0145, 0x0145, (L::Al, G::Lu)),
    (0x0146, 0x0146, (L::Al, G::Ll)),
    (0x0147, 0x0147, (L::Al, G::Lu)),
    (0x0148, 0x0149, (L::Al, G::Ll)),
    (0x014A, 0x014A, (L::Al, G::Lu)),
    (0x014B, 0x014B, (L::Al, G::Ll)),
    (0x014C, 0x014C, (L::Al, G::Lu)),
    (0x014D, 0x014D, (L::Al, G::Ll)),
    (0x014E, 0x014E, (L::Al, G::Lu)),
    (0x014F, 0x014F, (L::Al, G::Ll)),
    (0x0150, 0x0150, (L::Al, G::Lu)),
    (0x0151, 0x0151, (L::Al, G::Ll)),
    (0x0152, 0x0152, (L::Al, G::Lu)),
    (0x0153, 0x0153, (L::Al, G::Ll)),
    (0x0154, 0x0154, (L::Al, G::Lu)),
    (0x0155, 0x0155, (L::Al, G::Ll)),
    (0x0156, 0x0156, (L::Al, G::Lu)),
    (0x0157, 0x0157, (L::Al, G::Ll)),
    (0x0158, 0x0158, (L::Al, G::Lu)),
    (0x0159, 0x0159, (L::Al, G::Ll)),
    (0x015A, 0x015A, (L::Al, G::Lu)),
    (0x015B, 0x015B, (L::Al, G::Ll)),
    (0x015C, 0x015C, (L::Al, G::Lu)),
    (0x015D, 0x015D, (L::Al, G::Ll)),
    (0x015E, 0x015E, (L::Al, G::Lu)),
    (0x015F, 0x015F, (L::Al, G::Ll)),
    (0x0160, 0x0160, (L::Al, G::Lu)),
    (0x0161, 0x0161, (L::Al, G::Ll)),
    (0x0162, 0x0162, (L::Al, G::Lu)),
    (0x0163, 0x0163, (L::Al, G::Ll)),
    (0x0164, 0x0164, (L::Al, G::Lu)),
    (0x0165, 0x0165, (L::Al, G::Ll)),
    (0x0166, 0x0166, (L::Al, G::Lu)),
    (0x0167, 0x0167, (L::Al, G::Ll)),
    (0x0168, 0x0168, (L::Al, G::Lu)),
    (0x0169, 0x0169, (L::Al, G::Ll)),
    (0x016A, 0x016A, (L::Al, G::Lu)),
    (0x016B, 0x016B, (L::Al, G::Ll)),
    (0x016C, 0x016C, (L::Al, G::Lu)),
    (0x016D, 0x016D, (L::Al, G::Ll)),
    (0x016E, 0x016E, (L::Al, G::Lu)),
    (0x016F, 0x016F, (L::Al, G::Ll)),
    (0x0170, 0x0170, (L::Al, G::Lu)),
    (0x0171, 0x0171, (L::Al, G::Ll)),
    (0x0172, 0x0172, (L::Al, G::Lu)),
    (0x0173, 0x0173, (L::Al, G::Ll)),
    (0x0174, 0x0174, (L::Al, G::Lu)),
    (0x0175, 0x0175, (L::Al, G::Ll)),
    (0x0176, 0x0176, (L::Al, G::Lu)),
    (0x0177, 0x0177, (L::Al, G::Ll)),
    (0x0178, 0x0179, (L::Al, G::Lu)),
    (0x017A, 0x017A, (L::Al, G::Ll)),
    (0x017B, 0x017B, (L::Al, G::Lu)),
    (0x017C, 0x017C, (L::Al, G::Ll)),
    (0x017D, 0x017D, (L::Al, G::Lu)),
    (0x017E, 0x0180, (L::Al, G::Ll)),
    (0x0181, 0x0182, (L::Al, G::Lu)),
    (0x0183, 0x0183, (L::Al, G::Ll)),
    (0x0184, 0x0184, (L::Al, G::Lu)),
    (0x0185, 0x0185, (L::Al, G::Ll)),
    (0x0186, 0x0187, (L::Al, G::Lu)),
    (0x0188, 0x0188, (L::Al, G::Ll)),
    (0x0189, 0x018B, (L::Al, G::Lu)),
    (0x018C, 0x018D, (L::Al, G::Ll)),
    (0x018E, 0x0191, (L::Al, G::Lu)),
    (0x0192, 0x0192, (L::Al, G::Ll)),
    (0x0193, 0x0194, (L::Al, G::Lu)),
    (0x0195, 0x0195, (L::Al, G::Ll)),
    (0x0196, 0x0198, (L::Al, G::Lu)),
    (0x0199, 0x019B, (L::Al, G::Ll)),
    (0x019C, 0x019D, (L::Al, G::Lu)),
    (0x019E, 0x019E, (L::Al, G::Ll)),
    (0x019F, 0x01A0, (L::Al, G::Lu)),
    (0x01A1, 0x01A1, (L::Al, G::Ll)),
    (0x01A2, 0x01A2, (L::Al, G::Lu)),
    (0x01A3, 0x01A3, (L::Al, G::Ll)),
    (0x01A4, 0x01A4, (L::Al, G::Lu)),
    (0x01A5, 0x01A5, (L::Al, G::Ll)),
    (0x01A6, 0x01A7, (L::Al, G::Lu)),
    (0x01A8, 0x01A8, (L::Al, G::Ll)),
    (0x01A9, 0x01A9, (L::Al, G::Lu)),
    (0x01AA, 0x01AB, (L::Al, G::Ll)),
    (0x01AC, 0x01AC, (L::Al, G::Lu)),
    (0x01AD, 0x01AD, (L::Al, G::Ll)),
    (0x01AE, 0x01AF, (L::Al, G::Lu)),
    (0x01B0, 0x01B0, (L::Al, G::Ll)),
    (0x01B1, 0x01B3, (L::Al, G::Lu)),
    (0x01B4, 0x01B4, (L::Al, G::Ll)),
    (0x01B5, 0x01B5, (L::Al, G::Lu)),
    (0x01B6, 0x01B6, (L::Al, G::Ll)),
    (0x01B7, 0x01B8, (L::Al, G::Lu)),
    (0x01B9, 0x01BA, (L::Al, G::Ll)),
    (0x01BB, 0x01BB, (L::Al, G::Lo)),
    (0x01BC, 0x01BC, (L::Al, G::Lu)),
    (0x01BD, 0x01BF, (L::Al, G::Ll)),
    (0x01C0, 0x01C3, (L::Al, G::Lo)),
    (0x01C4, 0x01C4, (L::Al, G::Lu)),
    (0x01C5, 0x01C5, (L::Al, G::Lt)),
    (0x01C6, 0x01C6, (L::Al, G::Ll)),
    (0x01C7, 0x01C7, (L::Al, G::Lu)),
    (0x01C8, 0x01C8, (L::Al, G::Lt)),
    (0x01C9, 0x01C9, (L::Al, G::Ll)),
    (0x01CA, 0x01CA, (L::Al, G::Lu)),
    (0x01CB, 0x01CB, (L::Al, G::Lt)),
    (0x01CC, 0x01CC, (L::Al, G::Ll)),
    (0x01CD, 0x01CD, (L::Al, G::Lu)),
    (0x01CE, 0x01CE, (L::Al, G::Ll)),
    (0x01CF, 0x01CF, (L::Al, G::Lu)),
    (0x01D0, 0x01D0, (L::Al, G::Ll)),
    (0x01D1, 0x01D1, (L::Al, G::Lu)),
    (0x01D2, 0x01D2, (L::Al, G::Ll)),
    (0x01D3, 0x01D3, (L::Al, G::Lu)),
    (0x01D4, 0x01D4, (L::Al, G::Ll)),
    (0x01D5, 0x01D5, (L::Al, G::Lu)),
    (0x01D6, 0x01D6, (L::Al, G::Ll)),
    (0x01D7, 0x01D7, (L::Al, G::Lu)),
    (0x01D8, 0x01D8, (L::Al, G::Ll)),
    (0x01D9, 0x01D9, (L::Al, G::Lu)),
    (0x01DA, 0x01DA, (L::Al, G::Ll)),
    (0x01DB, 0x01DB, (L::Al, G::Lu)),
    (0x01DC, 0x01DD, (L::Al, G::Ll)),
    (0x01DE, 0x01DE, (L::Al, G::Lu)),
    (0x01DF, 0x01DF, (L::Al, G::Ll)),
    (0x01E0, 0x01E0, (L::Al, G::Lu)),
    (0x01E1, 0x01E1, (L::Al, G::Ll)),
    (0x01E2, 0x01E2, (L::Al, G::Lu)),
    (0x01E3, 0x01E3, (L::Al, G::Ll)),
    (0x01E4, 0x01E4, (L::Al, G::Lu)),
    (0x01E5, 0x01E5, (L::Al, G::Ll)),
    (0x01E6, 0x01E6, (L::Al, G::Lu)),
    (0x01E7, 0x01E7, (L::Al, G::Ll)),
    (0x01E8, 0x01E8, (L::Al, G::Lu)),
    (0x01E9, 0x01E9, (L::Al, G::Ll)),
    (0x01EA, 0x01EA, (L::Al, G::Lu)),
    (0x01EB, 0x01EB, (L::Al, G::Ll)),
    (0x01EC, 0x01EC, (L::Al, G::Lu)),
    (0x01ED, 0x01ED, (L::Al, G::Ll)),
    (0x01EE, 0x01EE, (L::Al, G::Lu)),
    (0x01EF, 0x01F0, (L::Al, G::Ll)),
    (0x01F1, 0x01F1, (L::Al, G::Lu)),
    (0x01F2, 0x01F2, (L::Al, G::Lt)),
    (0x01F3, 0x01F3, (L::Al, G::Ll)),
    (0x01F4, 0x01F4, (L::Al, G::Lu)),
    (0x01F5, 0x01F5, (L::Al, G::Ll)),
    (0x01F6, 0x01F8, (L::Al, G::Lu)),
    (0x01F9, 0x01F9, (L::Al, G::Ll)),
    (0x01FA, 0x01FA, (L::Al, G::Lu)),
    (0x01FB, 0x01FB, (L::Al, G::Ll)),
    (0x01FC, 0x01FC, (L::Al, G::Lu)),
    (0x01FD, 0x01FD, (L::Al, G::Ll)),
    (0x01FE, 0x01FE, (L::Al, G::Lu)),
    (0x01FF, 0x01FF, (L::Al, G::Ll)),
    (0x0200, 0x0200, (L::Al, G::Lu)),
    (0x0201, 0x0201, (L::Al, G::Ll)),
    (0x0202, 0x0202, (L::Al, G::Lu)),
    (0x0203, 0x0203, (L::Al, G::Ll)),
    (0x0204, 0x0204, (L::Al, G::Lu)),
    (0x0205, 0x0205, (L::Al, G::Ll)),
    (0x0206, 0x0206, (L::Al, G::Lu)),
    (0x0207, 0x0207, (L::Al, G::Ll)),
    (0x0208, 0x0208, (L::Al, G::Lu)),
    (0x0209, 0x0209, (L::Al, G::Ll)),
    (0x020A, 0x020A, (L::Al, G::Lu)),
    (0x020B, 0x020B, (L::Al, G::Ll)),
    (0x020C, 0x020C, (L::Al, G::Lu)),
    (0x020D, 0x020D, (L::Al, G::Ll)),
    (0x020E, 0x020E, (L::Al, G::Lu)),
    (0x020F, 0x020F, (L::Al, G::Ll)),
    (0x0210, 0x0210, (L::Al, G::Lu)),
    (0x0211, 0x0211, (L::Al, G::Ll)),
    (0x0212, 0x0212, (L::Al, G::Lu)),
    (0x0213, 0x0213, (L::Al, G::Ll)),
    (0x0214, 0x0214, (L::Al, G::Lu)),
    (0x0215, 0x0215, (L::Al, G::Ll)),
    (0x0216, 0x0216, (L::Al, G::Lu)),
    (0x0217, 0x0217, (L::Al, G::Ll)),
    (0x0218, 0x0218, (L::Al, G::Lu)),
    (0x0219, 0x0219, (L::Al, G::Ll)),
    (0x021A, 0x021A, (L::Al, G::Lu)),
    (0x021B, 0x021B, (L::Al, G::Ll)),
    (0x021C, 0x021C, (L::Al, G::Lu)),
    (0x021D, 0x021D, (L::Al, G::Ll)),
    (0x021E, 0x021E, (L::Al, G::Lu)),
    (0x021F, 0x021F, (L::Al, G::Ll)),
    (0x0220, 0x0220, (L::Al, G::Lu)),
    (0x0221, 0x0221, (L::Al, G::Ll)),
    (0x0222, 0x0222, (L::Al, G::Lu)),
    (0x0223, 0x0223, (L::Al, G::Ll)),
    (0x0224, 0x0224, (L::Al, G::Lu)),
    (0x0225, 0x0225, (L::Al, G::Ll)),
    (0x0226, 0x0226, (L::Al, G::Lu)),
    (0x0227, 0x0227, (L::Al, G::Ll)),
    (0x0228, 0x0228, (L::Al, G::Lu)),
    (0x0229, 0x0229, (L::Al, G::Ll)),
    (0x022A, 0x022A, (L::Al, G::Lu)),
    (0x022B, 0x022B, (L::Al, G::Ll)),
    (0x022C, 0x022C, (L::Al, G::Lu)),
    (0x022D, 0x022D, (L::Al, G::Ll)),
    (0x022E, 0x022E, (L::Al, G::Lu)),
    (0x022F, 0x022F, (L::Al, G::Ll)),
    (0x0230, 0x0230, (L::Al, G::Lu)),
    (0x0231, 0x0231, (L::Al, G::Ll)),
    (0x0232, 0x0232, (L::Al, G::Lu)),
    (0x0233, 0x0239, (L::Al, G::Ll)),
    (0x023A, 0x023B, (L::Al, G::Lu)),
    (0x023C, 0x023C, (L::Al, G::Ll)),
    (0x023D, 0x023E, (L::Al, G::Lu)),
    (0x023F, 0x0240, (L::Al, G::Ll)),
    (0x0241, 0x0241, (L::Al, G::Lu)),
    (0x0242, 0x0242, (L::Al, G::Ll)),
    (0x0243, 0x0246, (L::Al, G::Lu)),
    (0x0247, 0x0247, (L::Al, G::Ll)),
    (0x0248, 0x0248, (L::Al, G::Lu)),
    (0x0249, 0x0249, (L::Al, G::Ll)),
    (0x024A, 0x024A, (L::Al, G::Lu)),
    (0x024B, 0x024B, (L::Al, G::Ll)),
    (0x024C, 0x024C, (L::Al, G::Lu)),
    (0x024D, 0x024D, (L::Al, G::Ll)),
    (0x024E, 0x024E, (L::Al, G::Lu)),
    (0x024F, 0x0293, (L::Al, G::Ll)),
    (0x0294, 0x0295, (L::Al, G::Lo)),
    (0x0296, 0x02AF, (L::Al, G::Ll)),
    (0x02B0, 0x02C1, (L::Al, G::Lm)),
    (0x02C2, 0x02C5, (L::Al, G::Sk)),
    (0x02C6, 0x02C6, (L::Al, G::Lm)),
    (0x02C7, 0x02C7, (L::Ai, G::Lm)),
    (0x02C8, 0x02C8, (L::Bb, G::Lm)),
    (0x02C9, 0x02CB, (L::Ai, G::Lm)),
    (0x02CC, 0x02CC, (L::Bb, G::Lm)),
    (0x02CD, 0x02CD, (L::Ai, G::Lm)),
    (0x02CE, 0x02CF, (L::Al, G::Lm)),
    (0x02D0, 0x02D0, (L::Ai, G::Lm)),
    (0x02D1, 0x02D1, (L::Al, G::Lm)),
    (0x02D2, 0x02D7, (L::Al, G::Sk)),
    (0x02D8, 0x02DB, (L::Ai, G::Sk)),
    (0x02DC, 0x02DC, (L::Al, G::Sk)),
    (0x02DD, 0x02DD, (L::Ai, G::Sk)),
    (0x02DE, 0x02DE, (L::Al, G::Sk)),
    (0x02DF, 0x02DF, (L::Bb, G::Sk)),
    (0x02E0, 0x02E4, (L::Al, G::Lm)),
    (0x02E5, 0x02EB, (L::Al, G::Sk)),
    (0x02EC, 0x02EC, (L::Al, G::Lm)),
    (0x02ED, 0x02ED, (L::Al, G::Sk)),
    (0x02EE, 0x02EE, (L::Al, G::Lm)),
    (0x02EF, 0x02FF, (L::Al, G::Sk)),
    (0x0300, 0x035B, (L::Cm, G::Mn)),
    (0x035C, 0x0362, (L::Gl, G::Mn)),
    (0x0363, 0x036F, (L::Cm, G::Mn)),
    (0x0370, 0x0370, (L::Al, G::Lu)),
    (0x0371, 0x0371, (L::Al, G::Ll)),
    (0x0372, 0x0372, (L::Al, G::Lu)),
    (0x0373, 0x0373, (L::Al, G::Ll)),
    (0x0374, 0x0374, (L::Al, G::Lm)),
    (0x0375, 0x0375, (L::Al, G::Sk)),
    (0x0376, 0x0376, (L::Al, G::Lu)),
    (0x0377, 0x0377, (L::Al, G::Ll)),
    (0x037A, 0x037A, (L::Al, G::Lm)),
    (0x037B, 0x037D, (L::Al, G::Ll)),
    (0x037E, 0x037E, (L::Is, G::Po)),
    (0x037F, 0x037F, (L::Al, G::Lu)),
    (0x0384, 0x0385, (L::Al, G::Sk)),
    (0x0386, 0x0386, (L::Al, G::Lu)),
    (0x0387, 0x0387, (L::Al, G::Po)),
    (0x0388, 0x038A, (L::Al, G::Lu)),
    (0x038C, 0x038C, (L::Al, G::Lu)),
    (0x038E, 0x038F, (L::Al, G::Lu)),
    (0x0390, 0x0390, (L::Al, G::Ll)),
    (0x0391, 0x03A1, (L::Al, G::Lu)),
    (0x03A3, 0x03AB, (L::Al, G::Lu)),
    (0x03AC, 0x03CE, (L::Al, G::Ll)),
    (0x03CF, 0x03CF, (L::Al, G::Lu)),
    (0x03D0, 0x03D1, (L::Al, G::Ll)),
    (0x03D2, 0x03D4, (L::Al, G::Lu)),
    (0x03D5, 0x03D7, (L::Al, G::Ll)),
    (0x03D8, 0x03D8, (L::Al, G::Lu)),
    (0x03D9, 0x03D9, (L::Al, G::Ll)),
    (0x03DA, 0x03DA, (L::Al, G::Lu)),
    (0x03DB, 0x03DB, (L::Al, G::Ll)),
    (0x03DC, 0x03DC, (L::Al, G::Lu)),
    (0x03DD, 0x03DD, (L::Al, G::Ll)),
    (0x03DE, 0x03DE, (L::Al, G::Lu)),
    (0x03DF, 0x03DF, (L::Al, G::Ll)),
    (0x03E0, 0x03E0, (L::Al, G::Lu)),
    (0x03E1, 0x03E1, (L::Al, G::Ll)),
    (0x03E2, 0x03E2, (L::Al, G::Lu)),
    (0x03E3, 0x03E3, (L::Al, G::Ll)),
    (0x03E4, 0x03E4, (L::Al, G::Lu)),
    (0x03E5, 0x03E5, (L::Al, G::Ll)),
    (0x03E6, 0x03E6, (L::Al, G::Lu)),
    (0x03E7, 0x03E7, (L::Al, G::Ll)),
    (0x03E8, 0x03E8, (L::Al, G::Lu)),
    (0x03E9, 0x03E9, (L::Al, G::Ll)),
    (0x03EA, 0x03EA, (L::Al, G::Lu)),
    (0x03EB, 0x03EB, (L::Al, G::Ll)),
    (0x03EC, 0x03EC, (L::Al, G::Lu)),
    (0x03ED, 0x03ED, (L::Al, G::Ll)),
    (0x03EE, 0x03EE, (L::Al, G::Lu)),
    (0x03EF, 0x03F3, (L::Al, G::Ll)),
    (0x03F4, 0x03F4, (L::Al, G::Lu)),
    (0x03F5, 0x03F5, (L::Al, G::Ll)),
    (0x03F6, 0x03F6, (L::Al, G::Sm)),
    (0x03F7, 0x03F7, (L::Al, G::Lu)),
    (0x03F8, 0x03F8, (L::Al, G::Ll)),
    (0x03F9, 0x03FA, (L::Al, G::Lu)),
    (0x03FB, 0x03FC, (L::Al, G::Ll)),
    (0x03FD, 0x042F, (L::Al, G::Lu)),
    (0x0430, 0x045F, (L::Al, G::Ll)),
    (0x0460, 0x0460, (L::Al, G::Lu)),
    (0x0461, 0x0461, (L::Al, G::Ll)),
    (0x0462, 0x0462, (L::Al, G::Lu)),
    (0x0463, 0x0463, (L::Al, G::Ll)),
    (0x0464, 0x0464, (L::Al, G::Lu)),
    (0x0465, 0x0465, (L::Al, G::Ll)),
    (0x0466, 0x0466, (L::Al, G::Lu)),
    (0x0467, 0x0467, (L::Al, G::Ll)),
    (0x0468, 0x0468, (L::Al, G::Lu)),
    (0x0469, 0x0469, (L::Al, G::Ll)),
    (0x046A, 0x046A, (L::Al, G::Lu)),
    (0x046B, 0x046B, (L::Al, G::Ll)),
    (0x046C, 0x046C, (L::Al, G::Lu)),
    (0x046D, 0x046D, (L::Al, G::Ll)),
    (0x046E, 0x046E, (L::Al, G::Lu)),
    (0x046F, 0x046F, (L::Al, G::Ll)),
    (0x0470, 0x0470, (L::Al, G::Lu)),
    (0x0471, 0x0471, (L::Al, G::Ll)),
    (0x0472, 0x0472, (L::Al, G::Lu)),
    (0x0473, 0x0473, (L::Al, G::Ll)),
    (0x0474, 0x0474, (L::Al, G::Lu)),
    (0x0475, 0x0475, (L::Al, G::Ll)),
    (0x0476, 0x0476, (L::Al, G::Lu)),
    (0x0477, 0x0477, (L::Al, G::Ll)),
    (0x0478, 0x0478, (L::Al, G::Lu)),
    (0x0479, 0x0479, (L::Al, G::Ll)),
    (0x047A, 0x047A, (L::Al, G::Lu)),
    (0x047B, 0x047B, (L::Al, G::Ll)),
    (0x047C, 0x047C, (L::Al, G::Lu)),
    (0x047D, 0x047D, (L::Al, G::Ll)),
    (0x047E, 0x047E, (L::Al, G::Lu)),
    (0x047F, 0x047F, (L::Al, G::Ll)),
    (0x0480, 0x0480, (L::Al, G::Lu)),
    (0x0481, 0x0481, (L::Al, G::Ll)),
    (0x0482, 0x0482, (L::Al, G::So)),
    (0x0483, 0x0487, (L::Cm, G::Mn)),
    (0x0488, 0x0489, (L::Cm, G::Me)),
    (0x048A, 0x048A, (L::Al, G::Lu)),
    (0x048B, 0x048B, (L::Al, G::Ll)),
    (0x048C, 0x048C, (L::Al, G::Lu)),
    (0x048D, 0x048D, (L::Al, G::Ll)),
    (0x048E, 0x048E, (L::Al, G::Lu)),
    (0x048F, 0x048F, (L::Al, G::Ll)),
    (0x0490, 0x0490, (L::Al, G::Lu)),
    (0x0491, 0x0491, (L::Al, G::Ll)),
    (0x0492, 0x0492, (L::Al, G::Lu)),
    (0x0493, 0x0493, (L::Al, G::Ll)),
    (0x0494, 0x0494, (L::Al, G::Lu)),
    (0x0495, 0x0495, (L::Al, G::Ll)),
    (0x0496, 0x0496, (L::Al, G::Lu)),
    (0x0497, 0x0497, (L::Al, G::Ll)),
    (0x0498, 0x0498, (L::Al, G::Lu)),
    (0x0499, 0x0499, (L::Al, G::Ll)),
    (0x049A, 0x049A, (L::Al, G::Lu)),
    (0x049B, 0x049B, (L::Al, G::Ll)),
    (0x049C, 0x049C, (L::Al, G::Lu)),
    (0x049D, 0x049D, (L::Al, G::Ll)),
    (0x049E, 0x049E, (L::Al, G::Lu)),
    (0x049F, 0x049F, (L::Al, G::Ll)),
    (0x04A0, 0x04A0, (L::Al, G::Lu)),
    (0x04A1, 0x04A1, (L::Al, G::Ll)),
    (0x04A2, 0x04A2, (L::Al, G::Lu)),
    (0x04A3, 0x04A3, (L::Al, G::Ll)),
    (0x04A4, 0x04A4, (L::Al, G::Lu)),
    (0x04A5, 0x04A5, (L::Al, G::Ll)),
    (0x04A6, 0x04A6, (L::Al, G::Lu)),
    (0x04A7, 0x04A7, (L::Al, G::Ll)),
    (0x04A8, 0x04A8, (L::Al, G::Lu)),
    (0x04A9, 0x04A9, (L::Al, G::Ll)),
    (0x04AA, 0x04AA, (L::Al, G::Lu)),
    (0x04AB, 0x04AB, (L::Al, G::Ll)),
    (0x04AC, 0x04AC, (L::Al, G::Lu)),
    (0x04AD, 0x04AD, (L::Al, G::Ll)),
    (0x04AE, 0x04AE, (L::Al, G::Lu)),
    (0x04AF, 0x04AF, (L::Al, G::Ll)),
    (0x04B0, 0x04B0, (L::Al, G::Lu)),
    (0x04B1, 0x04B1, (L::Al, G::Ll)),
    (0x04B2, 0x04B2, (L::Al, G::Lu)),
    (0x04B3, 0x04B3, (L::Al, G::Ll)),
    (0x04B4, 0x04B4, (L::Al, G::Lu)),
    (0x04B5, 0x04B5, (L::Al, G::Ll)),
    (0x04B6, 0x04B6, (L::Al, G::Lu)),
    (0x04B7, 0x04B7, (L::Al, G::Ll)),
    (0x04B8, 0x04B8, (L::Al, G::Lu)),
    (0x04B9, 0x04B9, (L::Al, G::Ll)),
    (0x04BA, 0x04BA, (L::Al, G::Lu)),
    (0x04BB, 0x04BB, (L::Al, G::Ll)),
    (0x04BC, 0x04BC, (L::Al, G::Lu)),
    (0x04BD, 0x04BD, (L::Al, G::Ll)),
    (0x04BE, 0x04BE, (L::Al, G::Lu)),
    (0x04BF, 0x04BF, (L::Al, G::Ll)),
    (0x04C0, 0x04C1, (L::Al, G::Lu)),
    (0x04C2, 0x04C2, (L::Al, G::Ll)),
    (0x04C3, 0x04C3, (L::Al, G::Lu)),
    (0x04C4, 0x04C4, (L::Al, G::Ll)),
    (0x04C5, 0x04C5, (L::Al, G::Lu)),
    (0x04C6, 0x04C6, (L::Al, G::Ll)),
    (0x04C7, 0x04C7, (L::Al, G::Lu)),
    (0x04C8, 0x04C8, (L::Al, G::Ll)),
    (0x04C9, 0x04C9, (L::Al, G::Lu)),
    (0x04CA, 0x04CA, (L::Al, G::Ll)),
    (0x04CB, 0x04CB, (L::Al, G::Lu)),
    (0x04CC, 0x04CC, (L::Al, G::Ll)),
    (0x04CD, 0x04CD, (L::Al, G::Lu)),
    (0x04CE, 0x04CF, (L::Al, G::Ll)),
    (0x04D0, 0x04D0, (L::Al, G::Lu)),
    (0x04D1, 0x04D1, (L::Al, G::Ll)),
    (0x04D2, 0x04D2, (L::Al, G::Lu)),
    (0x04D3, 0x04D3, (L::Al, G::Ll)),
    (0x04D4, 0x04D4, (L::Al, G::Lu)),
    (0x04D5, 0x04D5, (L::Al, G::Ll)),
    (0x04D6, 0x04D6, (L::Al, G::Lu)),
    (0x04D7, 0x04D7, (L::Al, G::Ll)),
    (0x04D8, 0x04D8, (L::Al, G::Lu)),
    (0x04D9, 0x04D9, (L::Al, G::Ll)),
    (0x04DA, 0x04DA, (L::Al, G::Lu)),
    (0x04DB, 0x04DB, (L::Al, G::Ll)),
    (0x04DC, 0x04DC, (L::Al, G::Lu)),
    (0x04DD, 0x04DD, (L::Al, G::Ll)),
    (0x04DE, 0x04DE, (L::Al, G::Lu)),
    (0x04DF, 0x04DF, (L::Al, G::Ll)),
    (0x04E0, 0x04E0, (L::Al, G::Lu)),
    (0x04E1, 0x04E1, (L::Al, G::Ll)),
    (0x04E2, 0x04E2, (L::Al, G::Lu)),
    (0x04E3, 0x04E3, (L::Al, G::Ll)),
    (0x04E4, 0x04E4, (L::Al, G::Lu)),
    (0x04E5, 0x04E5, (L::Al, G::Ll)),
    (0x04E6, 0x04E6, (L::Al, G::Lu)),
    (0x04E7, 0x04E7, (L::Al, G::Ll)),
    (0x04E8, 0x04E8, (L::Al, G::Lu)),
    (0x04E9, 0x04E9, (L::Al, G::Ll)),
    (0x04EA, 0x04EA, (L::Al, G::Lu)),
    (0x04EB, 0x04EB, (L::Al, G::Ll)),
    (0x04EC, 0x04EC, (L::Al, G::Lu)),
    (0x04ED, 0x04ED, (L::Al, G::Ll)),
    (0x04EE, 0x04EE, (L::Al, G::Lu)),
    (0x04EF, 0x04EF, (L::Al, G::Ll)),
    (0x04F0, 0x04F0, (L::Al, G::Lu)),
    (0x04F1, 0x04F1, (L::Al, G::Ll)),
    (0x04F2, 0x04F2, (L::Al, G::Lu)),
    (0x04F3, 0x04F3, (L::Al, G::Ll)),
    (0x04F4, 0x04F4, (L::Al, G::Lu)),
    (0x04F5, 0x04F5, (L::Al, G::Ll)),
    (0x04F6, 0x04F6, (L::Al, G::Lu)),
    (0x04F7, 0x04F7, (L::Al, G::Ll)),
    (0x04F8, 0x04F8, (L::Al, G::Lu)),
    (0x04F9, 0x04F9, (L::Al, G::Ll)),
    (0x04FA, 0x04FA, (L::Al, G::Lu)),
    (0x04FB, 0x04FB, (L::Al, G::Ll)),
    (0x04FC, 0x04FC, (L::Al, G::Lu)),
    (0x04FD, 0x04FD, (L::Al, G::Ll)),
    (0x04FE, 0x04FE, (L::Al, G::Lu)),
    (0x04FF, 0x04FF, (L::Al, G::Ll)),
    (0x0500, 0x0500, (L::Al, G::Lu)),
    (0x0501, 0x0501, (L::Al, G::Ll)),
    (0x0502, 0x0502, (L::Al, G::Lu)),
    (0x0503, 0x0503, (L::Al, G::Ll)),
    (0x0504, 0x0504, (L::Al, G::Lu)),
    (0x0505, 0x0505, (L::Al, G::Ll)),
    (0x0506, 0x0506, (L::Al, G::Lu)),
    (0x0507, 0x0507, (L::Al, G::Ll)),
    (0x0508, 0x0508, (L::Al, G::Lu)),
    (0x0509, 0x0509, (L::Al, G::Ll)),
    (0x050A, 0x050A, (L::Al, G::Lu)),
    (0x050B, 0x050B, (L::Al, G::Ll)),
    (0x050C, 0x050C, (L::Al, G::Lu)),
    (0x050D, 0x050D, (L::Al, G::Ll)),
    (0x050E, 0x050E, (L::Al, G::Lu)),
    (0x050F, 0x050F, (L::Al, G::Ll)),
    (0x0510, 0x0510, (L::Al, G::Lu)),
    (0x0511, 0x0511, (L::Al, G::Ll)),
    (0x0512, 0x0512, (L::Al, G::Lu)),
    (0x0513, 0x0513, (L::Al, G::Ll)),
    (0x0514, 0x0514, (L::Al, G::Lu)),
    (0x0515, 0x0515, (L::Al, G::Ll)),
    (0x0516, 0x0516, (L::Al, G::Lu)),
    (0x0517, 0x0517, (L::Al, G::Ll)),
    (0x0518, 0x0518, (L::Al, G::Lu)),
    (0x0519, 0x0519, (L::Al, G::Ll)),
    (0x051A, 0x051A, (L::Al, G::Lu)),
    (0x051B, 0x051B, (L::Al, G::Ll)),
    (0x051C, 0x051C, (L::Al, G::Lu)),
    (0x051D, 0x051D, (L::Al, G::Ll)),
    (0x051E, 0x051E, (L::Al, G::Lu)),
    (0x051F, 0x051F, (L::Al, G::Ll)),
    (0x0520, 0x0520, (L::Al, G::Lu)),
    (0x0521, 0x0521, (L::Al, G::Ll)),
    (0x0522, 0x0522, (L::Al, G::Lu)),
    (0x0523, 0x0523, (L::Al, G::Ll)),
    (0x0524, 0x0524, (L::Al, G::Lu)),
    (0x0525, 0x0525, (L::Al, G::Ll)),
    (0x0526, 0x0526, (L::Al, G::Lu)),
    (0x0527, 0x0527, (L::Al, G::Ll)),
    (0x0528, 0x0528, (L::Al, G::Lu)),
    (0x0529, 0x0529, (L::Al, G::Ll)),
    (0x052A, 0x052A, (L::Al, G::Lu)),
    (0x052B, 0x052B, (L::Al, G::Ll)),
    (0x052C, 0x052C, (L::Al, G::Lu)),
    (0x052D, 0x052D, (L::Al, G::Ll)),
    (0x052E, 0x052E, (L::Al, G::Lu)),
    (0x052F, 0x052F, (L::Al, G::Ll)),
    (0x0531, 0x0556, (L::Al, G::Lu)),
    (0x0559, 0x0559, (L::Al, G::Lm)),
    (0x055A, 0x055F, (L::Al, G::Po)),
    (0x0560, 0x0588, (L::Al, G::Ll)),
    (0x0589, 0x0589, (L::Is, G::Po)),
    (0x058D, 0x058E, (L::Al, G::So)),
    (0x058F, 0x058F, (L::Pr, G::Sc)),
    (0x0591, 0x05BD, (L::Cm, G::Mn)),
    (0x05BF, 0x05BF, (L::Cm, G::Mn)),
    (0x05C0, 0x05C0, (L::Al, G::Po)),
    (0x05C1, 0x05C2, (L::Cm, G::Mn)),
    (0x05C3, 0x05C3, (L::Al, G::Po)),
    (0x05C4, 0x05C5, (L::Cm, G::Mn)),
    (0x05C6, 0x05C6, (L::Ex, G::Po)),
    (0x05C7, 0x05C7, (L::Cm, G::Mn)),
    (0x05D0, 0x05EA, (L::Hl, G::Lo)),
    (0x05EF, 0x05F2, (L::Hl, G::Lo)),
    (0x05F3, 0x05F4, (L::Al, G::Po)),
    (0x0600, 0x0605, (L::Nu, G::Cf)),
    (0x0606, 0x0608, (L::Al, G::Sm)),
    (0x0609, 0x060A, (L::Po, G::Po)),
    (0x060B, 0x060B, (L::Po, G::Sc)),
    (0x060C, 0x060D, (L::Is, G::Po)),
    (0x060E, 0x060F, (L::Al, G::So)),
    (0x0610, 0x061A, (L::Cm, G::Mn)),
    (0x061B, 0x061B, (L::Ex, G::Po)),
    (0x061C, 0x061C, (L::Cm, G::Cf)),
    (0x061D, 0x061F, (L::Ex, G::Po)),
    (0x0620, 0x063F, (L::Al, G::Lo)),
    (0x0640, 0x0640, (L::Al, G::Lm)),
    (0x0641, 0x064A, (L::Al, G::Lo)),
    (0x064B, 0x065F, (L::Cm, G::Mn)),
    (0x0660, 0x0669, (L::Nu, G::Nd)),
    (0x066A, 0x066A, (L::Po, G::Po)),
    (0x066B, 0x066C, (L::Nu, G::Po)),
    (0x066D, 0x066D, (L::Al, G::Po)),
    (0x066E, 0x066F, (L::Al, G::Lo)),
    (0x0670, 0x0670, (L::Cm, G::Mn)),
    (0x0671, 0x06D3, (L::Al, G::Lo)),
    (0x06D4, 0x06D4, (L::Ex, G::Po)),
    (0x06D5, 0x06D5, (L::Al, G::Lo)),
    (0x06D6, 0x06DC, (L::Cm, G::Mn)),
    (0x06DD, 0x06DD, (L::Nu, G::Cf)),
    (0x06DE, 0x06DE, (L::Al, G::So)),
    (0x06DF, 0x06E4, (L::Cm, G::Mn)),
    (0x06E5, 0x06E6, (L::Al, G::Lm)),
    (0x06E7, 0x06E8, (L::Cm, G::Mn)),
    (0x06E9, 0x06E9, (L::Al, G::So)),
    (0x06EA, 0x06ED, (L::Cm, G::Mn)),
    (0x06EE, 0x06EF, (L::Al, G::Lo)),
    (0x06F0, 0x06F9, (L::Nu, G::Nd)),
    (0x06FA, 0x06FC, (L::Al, G::Lo)),
    (0x06FD, 0x06FE, (L::Al, G::So)),
    (0x06FF, 0x06FF, (L::Al, G::Lo)),
    (0x0700, 0x070D, (L::Al, G::Po)),
    (0x070F, 0x070F, (L::Al, G::Cf)),
    (0x0710, 0x0710, (L::Al, G::Lo)),
    (0x0711, 0x0711, (L::Cm, G::Mn)),
    (0x0712, 0x072F, (L::Al, G::Lo)),
    (0x0730, 0x074A, (L::Cm, G::Mn)),
    (0x074D, 0x07A5, (L::Al, G::Lo)),
    (0x07A6, 0x07B0, (L::Cm, G::Mn)),
    (0x07B1, 0x07B1, (L::Al, G::Lo)),
    (0x07C0, 0x07C9, (L::Nu, G::Nd)),
    (0x07CA, 0x07EA, (L::Al, G::Lo)),
    (0x07EB, 0x07F3, (L::Cm, G::Mn)),
    (0x07F4, 0x07F5, (L::Al, G::Lm)),
    (0x07F6, 0x07F6, (L::Al, G::So)),
    (0x07F7, 0x07F7, (L::Al, G::Po)),
    (0x07F8, 0x07F8, (L::Is, G::Po)),
    (0x07F9, 0x07F9, (L::Ex, G::Po)),
    (0x07FA, 0x07FA, (L::Al, G::Lm)),
    (0x07FD, 0x07FD, (L::Cm, G::Mn)),
    (0x07FE, 0x07FF, (L::Pr, G::Sc)),
    (0x0800, 0x0815, (L::Al, G::Lo)),
    (0x0816, 0x0819, (L::Cm, G::Mn)),
    (0x081A, 0x081A, (L::Al, G::Lm)),
    (0x081B, 0x0823, (L::Cm, G::Mn)),
    (0x0824, 0x0824, (L::Al, G::Lm)),
    (0x0825, 0x0827, (L::Cm, G::Mn)),
    (0x0828, 0x0828, (L::Al, G::Lm)),
    (0x0829, 0x082D, (L::Cm, G::Mn)),
    (0x0830, 0x083E, (L::Al, G::Po)),
    (0x0840, 0x0858, (L::Al, G::Lo)),
    (0x0859, 0x085B, (L::Cm, G::Mn)),
    (0x085E, 0x085E, (L::Al, G::Po)),
    (0x0860, 0x086A, (L::Al, G::Lo)),
    (0x0870, 0x0887, (L::Al, G::Lo)),
    (0x0888, 0x0888, (L::Al, G::Sk)),
    (0x0889, 0x088F, (L::Al, G::Lo)),
    (0x0890, 0x0891, (L::Nu, G::Cf)),
    (0x0897, 0x089F, (L::Cm, G::Mn)),
    (0x08A0, 0x08C8, (L::Al, G::Lo)),
    (0x08C9, 0x08C9, (L::Al, G::Lm)),
    (0x08CA, 0x08E1, (L::Cm, G::Mn)),
    (0x08E2, 0x08E2, (L::Nu, G::Cf)),
    (0x08E3, 0x0902, (L::Cm, G::Mn)),
    (0x0903, 0x0903, (L::Cm, G::Mc)),
    (0x0904, 0x0939, (L::Al, G::Lo)),
    (0x093A, 0x093A, (L::Cm, G::Mn)),
    (0x093B, 0x093B, (L::Cm, G::Mc)),
    (0x093C, 0x093C, (L::Cm, G::Mn)),
    (0x093D, 0x093D, (L::Al, G::Lo)),
    (0x093E, 0x0940, (L::Cm, G::Mc)),
    (0x0941, 0x0948, (L::Cm, G::Mn)),
    (0x0949, 0x094C, (L::Cm, G::Mc)),
    (0x094D, 0x094D, (L::Cm, G::Mn)),
    (0x094E, 0x094F, (L::Cm, G::Mc)),
    (0x0950, 0x0950, (L::Al, G::Lo)),
    (0x0951, 0x0957, (L::Cm, G::Mn)),
    (0x0958, 0x0961, (L::Al, G::Lo)),
    (0x0962, 0x0963, (L::Cm, G::Mn)),
    (0x0964, 0x0965, (L::Ba, G::Po)),
    (0x0966, 0x096F, (L::Nu, G::Nd)),
    (0x0970, 0x0970, (L::Al, G::Po)),
    (0x0971, 0x0971, (L::Al, G::Lm)),
    (0x0972, 0x0980, (L::Al, G::Lo)),
    (0x0981, 0x0981, (L::Cm, G::Mn)),
    (0x0982, 0x0983, (L::Cm, G::Mc)),
    (0x0985, 0x098C, (L::Al, G::Lo)),
    (0x098F, 0x0990, (L::Al, G::Lo)),
    (0x0993, 0x09A8, (L::Al, G::Lo)),
    (0x09AA, 0x09B0, (L::Al, G::Lo)),
    (0x09B2, 0x09B2, (L::Al, G::Lo)),
    (0x09B6, 0x09B9, (L::Al, G::Lo)),
    (0x09BC, 0x09BC, (L::Cm, G::Mn)),
    (0x09BD, 0x09BD, (L::Al, G::Lo)),
    (0x09BE, 0x09C0, (L::Cm, G::Mc)),
    (0x09C1, 0x09C4, (L::Cm, G::Mn)),
    (0x09C7, 0x09C8, (L::Cm, G::Mc)),
    (0x09CB, 0x09CC, (L::Cm, G::Mc)),
    (0x09CD, 0x09CD, (L::Cm, G::Mn)),
    (0x09CE, 0x09CE, (L::Al, G::Lo)),
    (0x09D7, 0x09D7, (L::Cm, G::Mc)),
    (0x09DC, 0x09DD, (L::Al, G::Lo)),
    (0x09DF, 0x09E1, (L::Al, G::Lo)),
    (0x09E2, 0x09E3, (L::Cm, G::Mn)),
    (0x09E6, 0x09EF, (L::Nu, G::Nd)),
    (0x09F0, 0x09F1, (L::Al, G::Lo)),
    (0x09F2, 0x09F3, (L::Po, G::Sc)),
    (0x09F4, 0x09F8, (L::Al, G::No)),
    (0x09F9, 0x09F9, (L::Po, G::No)),
    (0x09FA, 0x09FA, (L::Al, G::So)),
    (0x09FB, 0x09FB, (L::Pr, G::Sc)),
    (0x09FC, 0x09FC, (L::Al, G::Lo)),
    (0x09FD, 0x09FD, (L::Al, G::Po)),
    (0x09FE, 0x09FE, (L::Cm, G::Mn)),
    (0x0A01, 0x0A02, (L::Cm, G::Mn)),
    (0x0A03, 0x0A03, (L::Cm, G::Mc)),
    (0x0A05, 0x0A0A, (L::Al, G::Lo)),
    (0x0A0F, 0x0A10, (L::Al, G::Lo)),
    (0x0A13, 0x0A28, (L::Al, G::Lo)),
    (0x0A2A, 0x0A30, (L::Al, G::Lo)),
    (0x0A32, 0x0A33, (L::Al, G::Lo)),
    (0x0A35, 0x0A36, (L::Al, G::Lo)),
    (0x0A38, 0x0A39, (L::Al, G::Lo)),
    (0x0A3C, 0x0A3C, (L::Cm, G::Mn)),
    (0x0A3E, 0x0A40, (L::Cm, G::Mc)),
    (0x0A41, 0x0A42, (L::Cm, G::Mn)),
    (0x0A47, 0x0A48, (L::Cm, G::Mn)),
    (0x0A4B, 0x0A4D, (L::Cm, G::Mn)),
    (0x0A51, 0x0A51, (L::Cm, G::Mn)),
    (0x0A59, 0x0A5C, (L::Al, G::Lo)),
    (0x0A5E, 0x0A5E, (L::Al, G::Lo)),
    (0x0A66, 0x0A6F, (L::Nu, G::Nd)),
    (0x0A70, 0x0A71, (L::Cm, G::Mn)),
    (0x0A72, 0x0A74, (L::Al, G::Lo)),
    (0x0A75, 0x0A75, (L::Cm, G::Mn)),
    (0x0A76, 0x0A76, (L::Al, G::Po)),
    (0x0A81, 0x0A82, (L::Cm, G::Mn)),
    (0x0A83, 0x0A83, (L::Cm, G::Mc)),
    (0x0A85, 0x0A8D, (L::Al, G::Lo)),
    (0x0A8F, 0x0A91, (L::Al, G::Lo)),
    (0x0A93, 0x0AA8, (L::Al, G::Lo)),
    (0x0AAA, 0x0AB0, (L::Al, G::Lo)),
    (0x0AB2, 0x0AB3, (L::Al, G::Lo)),
    (0x0AB5, 0x0AB9, (L::Al, G::Lo)),
    (0x0ABC, 0x0ABC, (L::Cm, G::Mn)),
    (0x0ABD, 0x0ABD, (L::Al, G::Lo)),
    (0x0ABE, 0x0AC0, (L::Cm, G::Mc)),
    (0x0AC1, 0x0AC5, (L::Cm, G::Mn)),
    (0x0AC7, 0x0AC8, (L::Cm, G::Mn)),
    (0x0AC9, 0x0AC9, (L::Cm, G::Mc)),
    (0x0ACB, 0x0ACC, (L::Cm, G::Mc)),
    (0x0ACD, 0x0ACD, (L::Cm, G::Mn)),
    (0x0AD0, 0x0AD0, (L::Al, G::Lo)),
    (0x0AE0, 0x0AE1, (L::Al, G::Lo)),
    (0x0AE2, 0x0AE3, (L::Cm, G::Mn)),
    (0x0AE6, 0x0AEF, (L::Nu, G::Nd)),
    (0x0AF0, 0x0AF0, (L::Al, G::Po)),
    (0x0AF1, 0x0AF1, (L::Pr, G::Sc)),
    (0x0AF9, 0x0AF9, (L::Al, G::Lo)),
    (0x0AFA, 0x0AFF, (L::Cm, G::Mn)),
    (0x0B01, 0x0B01, (L::Cm, G::Mn)),
    (0x0B02, 0x0B03, (L::Cm, G::Mc)),
    (0x0B05, 0x0B0C, (L::Al, G::Lo)),
    (0x0B0F, 0x0B10, (L::Al, G::Lo)),
    (0x0B13, 0x0B28, (L::Al, G::Lo)),
    (0x0B2A, 0x0B30, (L::Al, G::Lo)),
    (0x0B32, 0x0B33, (L::Al, G::Lo)),
    (0x0B35, 0x0B39, (L::Al, G::Lo)),
    (0x0B3C, 0x0B3C, (L::Cm, G::Mn)),
    (0x0B3D, 0x0B3D, (L::Al, G::Lo)),
    (0x0B3E, 0x0B3E, (L::Cm, G::Mc)),
    (0x0B3F, 0x0B3F, (L::Cm, G::Mn)),
    (0x0B40, 0x0B40, (L::Cm, G::Mc)),
    (0x0B41, 0x0B44, (L::Cm, G::Mn)),
    (0x0B47, 0x0B48, (L::Cm, G::Mc)),
    (0x0B4B, 0x0B4C, (L::Cm, G::Mc)),
    (0x0B4D, 0x0B4D, (L::Cm, G::Mn)),
    (0x0B55, 0x0B56, (L::Cm, G::Mn)),
    (0x0B57, 0x0B57, (L::Cm, G::Mc)),
    (0x0B5C, 0x0B5D, (L::Al, G::Lo)),
    (0x0B5F, 0x0B61, (L::Al, G::Lo)),
    (0x0B62, 0x0B63, (L::Cm, G::Mn)),
    (0x0B66, 0x0B6F, (L::Nu, G::Nd)),
    (0x0B70, 0x0B70, (L::Al, G::So)),
    (0x0B71, 0x0B71, (L::Al, G::Lo)),
    (0x0B72, 0x0B77, (L::Al, G::No)),
    (0x0B82, 0x0B82, (L::Cm, G::Mn)),
    (0x0B83, 0x0B83, (L::Al, G::Lo)),
    (0x0B85, 0x0B8A, (L::Al, G::Lo)),
    (0x0B8E, 0x0B90, (L::Al, G::Lo)),
    (0x0B92, 0x0B95, (L::Al, G::Lo)),
    (0x0B99, 0x0B9A, (L::Al, G::Lo)),
    (0x0B9C, 0x0B9C, (L::Al, G::Lo)),
    (0x0B9E, 0x0B9F, (L::Al, G::Lo)),
    (0x0BA3, 0x0BA4, (L::Al, G::Lo)),
    (0x0BA8, 0x0BAA, (L::Al, G::Lo)),
    (0x0BAE, 0x0BB9, (L::Al, G::Lo)),
    (0x0BBE, 0x0BBF, (L::Cm, G::Mc)),
    (0x0BC0, 0x0BC0, (L::Cm, G::Mn)),
    (0x0BC1, 0x0BC2, (L::Cm, G::Mc)),
    (0x0BC6, 0x0BC8, (L::Cm, G::Mc)),
    (0x0BCA, 0x0BCC, (L::Cm, G::Mc)),
    (0x0BCD, 0x0BCD, (L::Cm, G::Mn)),
    (0x0BD0, 0x0BD0, (L::Al, G::Lo)),
    (0x0BD7, 0x0BD7, (L::Cm, G::Mc)),
    (0x0BE6, 0x0BEF, (L::Nu, G::Nd)),
    (0x0BF0, 0x0BF2, (L::Al, G::No)),
    (0x0BF3, 0x0BF8, (L::Al, G::So)),
    (0x0BF9, 0x0BF9, (L::Pr, G::Sc)),
    (0x0BFA, 0x0BFA, (L::Al, G::So)),
    (0x0C00, 0x0C00, (L::Cm, G::Mn)),
    (0x0C01, 0x0C03, (L::Cm, G::Mc)),
    (0x0C04, 0x0C04, (L::Cm, G::Mn)),
    (0x0C05, 0x0C0C, (L::Al, G::Lo)),
    (0x0C0E, 0x0C10, (L::Al, G::Lo)),
    (0x0C12, 0x0C28, (L::Al, G::Lo)),
    (0x0C2A, 0x0C39, (L::Al, G::Lo)),
    (0x0C3C, 0x0C3C, (L::Cm, G::Mn)),
    (0x0C3D, 0x0C3D, (L::Al, G::Lo)),
    (0x0C3E, 0x0C40, (L::Cm, G::Mn)),
    (0x0C41, 0x0C44, (L::Cm, G::Mc)),
    (0x0C46, 0x0C48, (L::Cm, G::Mn)),
    (0x0C4A, 0x0C4D, (L::Cm, G::Mn)),
    (0x0C55, 0x0C56, (L::Cm, G::Mn)),
    (0x0C58, 0x0C5A, (L::Al, G::Lo)),
    (0x0C5C, 0x0C5D, (L::Al, G::Lo)),
    (0x0C60, 0x0C61, (L::Al, G::Lo)),
    (0x0C62, 0x0C63, (L::Cm, G::Mn)),
    (0x0C66, 0x0C6F, (L::Nu, G::Nd)),
    (0x0C77, 0x0C77, (L::Bb, G::Po)),
    (0x0C78, 0x0C7E, (L::Al, G::No)),
    (0x0C7F, 0x0C7F, (L::Al, G::So)),
    (0x0C80, 0x0C80, (L::Al, G::Lo)),
    (0x0C81, 0x0C81, (L::Cm, G::Mn)),
    (0x0C82, 0x0C83, (L::Cm, G::Mc)),
    (0x0C84, 0x0C84, (L::Bb, G::Po)),
    (0x0C85, 0x0C8C, (L::Al, G::Lo)),
    (0x0C8E, 0x0C90, (L::Al, G::Lo)),
    (0x0C92, 0x0CA8, (L::Al, G::Lo)),
    (0x0CAA, 0x0CB3, (L::Al, G::Lo)),
    (0x0CB5, 0x0CB9, (L::Al, G::Lo)),
    (0x0CBC, 0x0CBC, (L::Cm, G::Mn)),
    (0x0CBD, 0x0CBD, (L::Al, G::Lo)),
    (0x0CBE, 0x0CBE, (L::Cm, G::Mc)),
    (0x0CBF, 0x0CBF, (L::Cm, G::Mn)),
    (0x0CC0, 0x0CC4, (L::Cm, G::Mc)),
    (0x0CC6, 0x0CC6, (L::Cm, G::Mn)),
    (0x0CC7, 0x0CC8, (L::Cm, G::Mc)),
    (0x0CCA, 0x0CCB, (L::Cm, G::Mc)),
    (0x0CCC, 0x0CCD, (L::Cm, G::Mn)),
    (0x0CD5, 0x0CD6, (L::Cm, G::Mc)),
    (0x0CDC, 0x0CDE, (L::Al, G::Lo)),
    (0x0CE0, 0x0CE1, (L::Al, G::Lo)),
    (0x0CE2, 0x0CE3, (L::Cm, G::Mn)),
    (0x0CE6, 0x0CEF, (L::Nu, G::Nd)),
    (0x0CF1, 0x0CF2, (L::Al, G::Lo)),
    (0x0CF3, 0x0CF3, (L::Cm, G::Mc)),
    (0x0D00, 0x0D01, (L::Cm, G::Mn)),
    (0x0D02, 0x0D03, (L::Cm, G::Mc)),
    (0x0D04, 0x0D0C, (L::Al, G::Lo)),
    (0x0D0E, 0x0D10, (L::Al, G::Lo)),
    (0x0D12, 0x0D3A, (L::Al, G::Lo)),
    (0x0D3B, 0x0D3C, (L::Cm, G::Mn)),
    (0x0D3D, 0x0D3D, (L::Al, G::Lo)),
    (0x0D3E, 0x0D40, (L::Cm, G::Mc)),
    (0x0D41, 0x0D44, (L::Cm, G::Mn)),
    (0x0D46, 0x0D48, (L::Cm, G::Mc)),
    (0x0D4A, 0x0D4C, (L::Cm, G::Mc)),
    (0x0D4D, 0x0D4D, (L::Cm, G::Mn)),
    (0x0D4E, 0x0D4E, (L::Al, G::Lo)),
    (0x0D4F, 0x0D4F, (L::Al, G::So)),
    (0x0D54, 0x0D56, (L::Al, G::Lo)),
    (0x0D57, 0x0D57, (L::Cm, G::Mc)),
    (0x0D58, 0x0D5E, (L::Al, G::No)),
    (0x0D5F, 0x0D61, (L::Al, G::Lo)),
    (0x0D62, 0x0D63, (L::Cm, G::Mn)),
    (0x0D66, 0x0D6F, (L::Nu, G::Nd)),
    (0x0D70, 0x0D78, (L::Al, G::No)),
    (0x0D79, 0x0D79, (L::Po, G::So)),
    (0x0D7A, 0x0D7F, (L::Al, G::Lo)),
    (0x0D81, 0x0D81, (L::Cm, G::Mn)),
    (0x0D82, 0x0D83, (L::Cm, G::Mc)),
    (0x0D85, 0x0D96, (L::Al, G::Lo)),
    (0x0D9A, 0x0DB1, (L::Al, G::Lo)),
    (0x0DB3, 0x0DBB, (L::Al, G::Lo)),
    (0x0DBD, 0x0DBD, (L::Al, G::Lo)),
    (0x0DC0, 0x0DC6, (L::Al, G::Lo)),
    (0x0DCA, 0x0DCA, (L::Cm, G::Mn)),
    (0x0DCF, 0x0DD1, (L::Cm, G::Mc)),
    (0x0DD2, 0x0DD4, (L::Cm, G::Mn)),
    (0x0DD6, 0x0DD6, (L::Cm, G::Mn)),
    (0x0DD8, 0x0DDF, (L::Cm, G::Mc)),
    (0x0DE6, 0x0DEF, (L::Nu, G::Nd)),
    (0x0DF2, 0x0DF3, (L::Cm, G::Mc)),
    (0x0DF4, 0x0DF4, (L::Al, G::Po)),
    (0x0E01, 0x0E30, (L::Sa, G::Lo)),
    (0x0E31, 0x0E31, (L::Sa, G::Mn)),
    (0x0E32, 0x0E33, (L::Sa, G::Lo)),
    (0x0E34, 0x0E3A, (L::Sa, G::Mn)),
    (0x0E3F, 0x0E3F, (L::Pr, G::Sc)),
    (0x0E40, 0x0E45, (L::Sa, G::Lo)),
    (0x0E46, 0x0E46, (L::Sa, G::Lm)),
    (0x0E47, 0x0E4E, (L::Sa, G::Mn)),
    (0x0E4F, 0x0E4F, (L::Al, G::Po)),
    (0x0E50, 0x0E59, (L::Nu, G::Nd)),
    (0x0E5A, 0x0E5B, (L::Ba, G::Po)),
    (0x0E81, 0x0E82, (L::Sa, G::Lo)),
    (0x0E84, 0x0E84, (L::Sa, G::Lo)),
    (0x0E86, 0x0E8A, (L::Sa, G::Lo)),
    (0x0E8C, 0x0EA3, (L::Sa, G::Lo)),
    (0x0EA5, 0x0EA5, (L::Sa, G::Lo)),
    (0x0EA7, 0x0EB0, (L::Sa, G::Lo)),
    (0x0EB1, 0x0EB1, (L::Sa, G::Mn)),
    (0x0EB2, 0x0EB3, (L::Sa, G::Lo)),
    (0x0EB4, 0x0EBC, (L::Sa, G::Mn)),
    (0x0EBD, 0x0EBD, (L::Sa, G::Lo)),
    (0x0EC0, 0x0EC4, (L::Sa, G::Lo)),
    (0x0EC6, 0x0EC6, (L::Sa, G::Lm)),
    (0x0EC8, 0x0ECE, (L::Sa, G::Mn)),
    (0x0ED0, 0x0ED9, (L::Nu, G::Nd)),
    (0x0EDC, 0x0EDF, (L::Sa, G::Lo)),
    (0x0F00, 0x0F00, (L::Al, G::Lo)),
    (0x0F01, 0x0F03, (L::Bb, G::So)),
    (0x0F04, 0x0F04, (L::Bb, G::Po)),
    (0x0F05, 0x0F05, (L::Al, G::Po)),
    (0x0F06, 0x0F07, (L::Bb, G::Po)),
    (0x0F08, 0x0F08, (L::Gl, G::Po)),
    (0x0F09, 0x0F0A, (L::Bb, G::Po)),
    (0x0F0B, 0x0F0B, (L::Ba, G::Po)),
    (0x0F0C, 0x0F0C, (L::Gl, G::Po)),
    (0x0F0D, 0x0F11, (L::Ex, G::Po)),
    (0x0F12, 0x0F12, (L::Gl, G::Po)),
    (0x0F13, 0x0F13, (L::Al, G::So)),
    (0x0F14, 0x0F14, (L::Ex, G::Po)),
    (0x0F15, 0x0F17, (L::Al, G::So)),
    (0x0F18, 0x0F19, (L::Cm, G::Mn)),
    (0x0F1A, 0x0F1F, (L::Al, G::So)),
    (0x0F20, 0x0F29, (L::Nu, G::Nd)),
    (0x0F2A, 0x0F33, (L::Al, G::No)),
    (0x0F34, 0x0F34, (L::Ba, G::So)),
    (0x0F35, 0x0F35, (L::Cm, G::Mn)),
    (0x0F36, 0x0F36, (L::Al, G::So)),
    (0x0F37, 0x0F37, (L::Cm, G::Mn)),
    (0x0F38, 0x0F38, (L::Al, G::So)),
    (0x0F39, 0x0F39, (L::Cm, G::Mn)),
    (0x0F3A, 0x0F3A, (L::Op, G::Ps)),
    (0x0F3B, 0x0F3B, (L::Cl, G::Pe)),
    (0x0F3C, 0x0F3C, (L::Op, G::Ps)),
    (0x0F3D, 0x0F3D, (L::Cl, G::Pe)),
    (0x0F3E, 0x0F3F, (L::Cm, G::Mc)),
    (0x0F40, 0x0F47, (L::Al, G::Lo)),
    (0x0F49, 0x0F6C, (L::Al, G::Lo)),
    (0x0F71, 0x0F7E, (L::Cm, G::Mn)),
    (0x0F7F, 0x0F7F, (L::Ba, G::Mc)),
    (0x0F80, 0x0F84, (L::Cm, G::Mn)),
    (0x0F85, 0x0F85, (L::Ba, G::Po)),
    (0x0F86, 0x0F87, (L::Cm, G::Mn)),
    (0x0F88, 0x0F8C, (L::Al, G::Lo)),
    (0x0F8D, 0x0F97, (L::Cm, G::Mn)),
    (0x0F99, 0x0FBC, (L::Cm, G::Mn)),
    (0x0FBE, 0x0FBF, (L::Ba, G::So)),
    (0x0FC0, 0x0FC5, (L::Al, G::So)),
    (0x0FC6, 0x0FC6, (L::Cm, G::Mn)),
    (0x0FC7, 0x0FCC, (L::Al, G::So)),
    (0x0FCE, 0x0FCF, (L::Al, G::So)),
    (0x0FD0, 0x0FD1, (L::Bb, G::Po)),
    (0x0FD2, 0x0FD2, (L::Ba, G::Po)),
    (0x0FD3, 0x0FD3, (L::Bb, G::Po)),
    (0x0FD4, 0x0FD4, (L::Al, G::Po)),
    (0x0FD5, 0x0FD8, (L::Al, G::So)),
    (0x0FD9, 0x0FDA, (L::Gl, G::Po)),
    (0x1000, 0x102A, (L::Sa, G::Lo)),
    (0x102B, 0x102C, (L::Sa, G::Mc)),
    (0x102D, 0x1030, (L::Sa, G::Mn)),
    (0x1031, 0x1031, (L::Sa, G::Mc)),
    (0x1032, 0x1037, (L::Sa, G::Mn)),
    (0x1038, 0x1038, (L::Sa, G::Mc)),
    (0x1039, 0x103A, (L::Sa, G::Mn)),
    (0x103B, 0x103C, (L::Sa, G::Mc)),
    (0x103D, 0x103E, (L::Sa, G::Mn)),
    (0x103F, 0x103F, (L::Sa, G::Lo)),
    (0x1040, 0x1049, (L::Nu, G::Nd)),
    (0x104A, 0x104B, (L::Ba, G::Po)),
    (0x104C, 0x104F, (L::Al, G::Po)),
    (0x1050, 0x1055, (L::Sa, G::Lo)),
    (0x1056, 0x1057, (L::Sa, G::Mc)),
    (0x1058, 0x1059, (L::Sa, G::Mn)),
    (0x105A, 0x105D, (L::Sa, G::Lo)),
    (0x105E, 0x1060, (L::Sa, G::Mn)),
    (0x1061, 0x1061, (L::Sa, G::Lo)),
    (0x1062, 0x1064, (L::Sa, G::Mc)),
    (0x1065, 0x1066, (L::Sa, G::Lo)),
    (0x1067, 0x106D, (L::Sa, G::Mc)),
    (0x106E, 0x1070, (L::Sa, G::Lo)),
    (0x1071, 0x1074, (L::Sa, G::Mn)),
    (0x1075, 0x1081, (L::Sa, G::Lo)),
    (0x1082, 0x1082, (L::Sa, G::Mn)),
    (0x1083, 0x1084, (L::Sa, G::Mc)),
    (0x1085, 0x1086, (L::Sa, G::Mn)),
    (0x1087, 0x108C, (L::Sa, G::Mc)),
    (0x108D, 0x108D, (L::Sa, G::Mn)),
    (0x108E, 0x108E, (L::Sa, G::Lo)),
    (0x108F, 0x108F, (L::Sa, G::Mc)),
    (0x1090, 0x1099, (L::Nu, G::Nd)),
    (0x109A, 0x109C, (L::Sa, G::Mc)),
    (0x109D, 0x109D, (L::Sa, G::Mn)),
    (0x109E, 0x109F, (L::Sa, G::So)),
    (0x10A0, 0x10C5, (L::Al, G::Lu)),
    (0x10C7, 0x10C7, (L::Al, G::Lu)),
    (0x10CD, 0x10CD, (L::Al, G::Lu)),
    (0x10D0, 0x10FA, (L::Al, G::Ll)),
    (0x10FB, 0x10FB, (L::Al, G::Po)),
    (0x10FC, 0x10FC, (L::Al, G::Lm)),
    (0x10FD, 0x10FF, (L::Al, G::Ll)),
    (0x1100, 0x115F, (L::Jl, G::Lo)),
    (0x1160, 0x11A7, (L::Jv, G::Lo)),
    (0x11A8, 0x11FF, (L::Jt, G::Lo)),
    (0x1200, 0x1248, (L::Al, G::Lo)),
    (0x124A, 0x124D, (L::Al, G::Lo)),
    (0x1250, 0x1256, (L::Al, G::Lo)),
    (0x1258, 0x1258, (L::Al, G::Lo)),
    (0x125A, 0x125D, (L::Al, G::Lo)),
    (0x1260, 0x1288, (L::Al, G::Lo)),
    (0x128A, 0x128D, (L::Al, G::Lo)),
    (0x1290, 0x12B0, (L::Al, G::Lo)),
    (0x12B2, 0x12B5, (L::Al, G::Lo)),
    (0x12B8, 0x12BE, (L::Al, G::Lo)),
    (0x12C0, 0x12C0, (L::Al, G::Lo)),
    (0x12C2, 0x12C5, (L::Al, G::Lo)),
    (0x12C8, 0x12D6, (L::Al, G::Lo)),
    (0x12D8, 0x1310, (L::Al, G::Lo)),
    (0x1312, 0x1315, (L::Al, G::Lo)),
    (0x1318, 0x135A, (L::Al, G::Lo)),
    (0x135D, 0x135F, (L::Cm, G::Mn)),
    (0x1360, 0x1360, (L::Al, G::Po)),
    (0x1361, 0x1361, (L::Ba, G::Po)),
    (0x1362, 0x1368, (L::Al, G::Po)),
    (0x1369, 0x137C, (L::Al, G::No)),
    (0x1380, 0x138F, (L::Al, G::Lo)),
    (0x1390, 0x1399, (L::Al, G::So)),
    (0x13A0, 0x13F5, (L::Al, G::Lu)),
    (0x13F8, 0x13FD, (L::Al, G::Ll)),
    (0x1401, 0x166C, (L::Al, G::Lo)),
    (0x166D, 0x166D, (L::Al, G::So)),
    (0x166E, 0x166E, (L::Al, G::Po)),
    (0x166F, 0x167F, (L::Al, G::Lo)),
    (0x1680, 0x1680, (L::Ba, G::Zs)),
    (0x1681, 0x169A, (L::Al, G::Lo)),
    (0x169B, 0x169B, (L::Op, G::Ps)),
    (0x169C, 0x169C, (L::Cl, G::Pe)),
    (0x16A0, 0x16EA, (L::Al, G::Lo)),
    (0x16EB, 0x16ED, (L::Ba, G::Po)),
    (0x16EE, 0x16F0, (L::Al, G::Nl)),
    (0x16F1, 0x16F8, (L::Al, G::Lo)),
    (0x1700, 0x1711, (L::Al, G::Lo)),
    (0x1712, 0x1714, (L::Cm, G::Mn)),
    (0x1715, 0x1715, (L::Cm, G::Mc)),
    (0x171F, 0x1731, (L::Al, G::Lo)),
    (0x1732, 0x1733, (L::Cm, G::Mn)),
    (0x1734, 0x1734, (L::Cm, G::Mc)),
    (0x1735, 0x1736, (L::Ba, G::Po)),
    (0x1740, 0x1751, (L::Al, G::Lo)),
    (0x1752, 0x1753, (L::Cm, G::Mn)),
    (0x1760, 0x176C, (L::Al, G::Lo)),
    (0x176E, 0x1770, (L::Al, G::Lo)),
    (0x1772, 0x1773, (L::Cm, G::Mn)),
    (0x1780, 0x17B3, (L::Sa, G::Lo)),
    (0x17B4, 0x17B5, (L::Sa, G::Mn)),
    (0x17B6, 0x17B6, (L::Sa, G::Mc)),
    (0x17B7, 0x17BD, (L::Sa, G::Mn)),
    (0x17BE, 0x17C5, (L::Sa, G::Mc)),
    (0x17C6, 0x17C6, (L::Sa, G::Mn)),
    (0x17C7, 0x17C8, (L::Sa, G::Mc)),
    (0x17C9, 0x17D3, (L::Sa, G::Mn)),
    (0x17D4, 0x17D5, (L::Ba, G::Po)),
    (0x17D6, 0x17D6, (L::Ns, G::Po)),
    (0x17D7, 0x17D7, (L::Sa, G::Lm)),
    (0x17D8, 0x17D8, (L::Ba, G::Po)),
    (0x17D9, 0x17D9, (L::Al, G::Po)),
    (0x17DA, 0x17DA, (L::Ba, G::Po)),
    (0x17DB, 0x17DB, (L::Pr, G::Sc)),
    (0x17DC, 0x17DC, (L::Sa, G::Lo)),
    (0x17DD, 0x17DD, (L::Sa, G::Mn)),
    (0x17E0, 0x17E9, (L::Nu, G::Nd)),
    (0x17F0, 0x17F9, (L::Al, G::No)),
    (0x1800, 0x1801, (L::Al, G::Po)),
    (0x1802, 0x1803, (L::Ex, G::Po)),
    (0x1804, 0x1805, (L::Ba, G::Po)),
    (0x1806, 0x1806, (L::Bb, G::Pd)),
    (0x1807, 0x1807, (L::Al, G::Po)),
    (0x1808, 0x1809, (L::Ex, G::Po)),
    (0x180A, 0x180A, (L::Al, G::Po)),
    (0x180B, 0x180D, (L::Cm, G::Mn)),
    (0x180E, 0x180E, (L::Gl, G::Cf)),
    (0x180F, 0x180F, (L::Cm, G::Mn)),
    (0x1810, 0x1819, (L::Nu, G::Nd)),
    (0x1820, 0x1842, (L::Al, G::Lo)),
    (0x1843, 0x1843, (L::Al, G::Lm)),
    (0x1844, 0x1878, (L::Al, G::Lo)),
    (0x1880, 0x1884, (L::Al, G::Lo)),
    (0x1885, 0x1886, (L::Cm, G::Mn)),
    (0x1887, 0x18A8, (L::Al, G::Lo)),
    (0x18A9, 0x18A9, (L::Cm, G::Mn)),
    (0x18AA, 0x18AA, (L::Al, G::Lo)),
    (0x18B0, 0x18F5, (L::Al, G::Lo)),
    (0x1900, 0x191E, (L::Al, G::Lo)),
    (0x1920, 0x1922, (L::Cm, G::Mn)),
    (0x1923, 0x1926, (L::Cm, G::Mc)),
    (0x1927, 0x1928, (L::Cm, G::Mn)),
    (0x1929, 0x192B, (L::Cm, G::Mc)),
    (0x1930, 0x1931, (L::Cm, G::Mc)),
    (0x1932, 0x1932, (L::Cm, G::Mn)),
    (0x1933, 0x1938, (L::Cm, G::Mc)),
    (0x1939, 0x193B, (L::Cm, G::Mn)),
    (0x1940, 0x1940, (L::Al, G::So)),
    (0x1944, 0x1945, (L::Ex, G::Po)),
    (0x1946, 0x194F, (L::Nu, G::Nd)),
    (0x1950, 0x196D, (L::Sa, G::Lo)),
    (0x1970, 0x1974, (L::Sa, G::Lo)),
    (0x1980, 0x19AB, (L::Sa, G::Lo)),
    (0x19B0, 0x19C9, (L::Sa, G::Lo)),
    (0x19D0, 0x19D9, (L::Nu, G::Nd)),
    (0x19DA, 0x19DA, (L::Nu, G::No)),
    (0x19DE, 0x19DF, (L::Sa, G::So)),
    (0x19E0, 0x19FF, (L::Al, G::So)),
    (0x1A00, 0x1A16, (L::Al, G::Lo)),
    (0x1A17, 0x1A18, (L::Cm, G::Mn)),
    (0x1A19, 0x1A1A, (L::Cm, G::Mc)),
    (0x1A1B, 0x1A1B, (L::Cm, G::Mn)),
    (0x1A1E, 0x1A1F, (L::Al, G::Po)),
    (0x1A20, 0x1A54, (L::Sa, G::Lo)),
    (0x1A55, 0x1A55, (L::Sa, G::Mc)),
    (0x1A56, 0x1A56, (L::Sa, G::Mn)),
    (0x1A57, 0x1A57, (L::Sa, G::Mc)),
    (0x1A58, 0x1A5E, (L::Sa, G::Mn)),
    (0x1A60, 0x1A60, (L::Sa, G::Mn)),
    (0x1A61, 0x1A61, (L::Sa, G::Mc)),
    (0x1A62, 0x1A62, (L::Sa, G::Mn)),
    (0x1A63, 0x1A64, (L::Sa, G::Mc)),
    (0x1A65, 0x1A6C, (L::Sa, G::Mn)),
    (0x1A6D, 0x1A72, (L::Sa, G::Mc)),
    (0x1A73, 0x1A7C, (L::Sa, G::Mn)),
    (0x1A7F, 0x1A7F, (L::Cm, G::Mn)),
    (0x1A80, 0x1A89, (L::Nu, G::Nd)),
    (0x1A90, 0x1A99, (L::Nu, G::Nd)),
    (0x1AA0, 0x1AA6, (L::Sa, G::Po)),
    (0x1AA7, 0x1AA7, (L::Sa, G::Lm)),
    (0x1AA8, 0x1AAD, (L::Sa, G::Po)),
    (0x1AB0, 0x1ABD, (L::Cm, G::Mn)),
    (0x1ABE, 0x1ABE, (L::Cm, G::Me)),
    (0x1ABF, 0x1ADD, (L::Cm, G::Mn)),
    (0x1AE0, 0x1AEA, (L::Cm, G::Mn)),
    (0x1AEB, 0x1AEB, (L::Gl, G::Mn)),
    (0x1B00, 0x1B03, (L::Cm, G::Mn)),
    (0x1B04, 0x1B04, (L::Cm, G::Mc)),
    (0x1B05, 0x1B33, (L::Ak, G::Lo)),
    (0x1B34, 0x1B34, (L::Cm, G::Mn)),
    (0x1B35, 0x1B35, (L::Cm, G::Mc)),
    (0x1B36, 0x1B3A, (L::Cm, G::Mn)),
    (0x1B3B, 0x1B3B, (L::Cm, G::Mc)),
    (0x1B3C, 0x1B3C, (L::Cm, G::Mn)),
    (0x1B3D, 0x1B41, (L::Cm, G::Mc)),
    (0x1B42, 0x1B42, (L::Cm, G::Mn)),
    (0x1B43, 0x1B43, (L::Cm, G::Mc)),
    (0x1B44, 0x1B44, (L::Vi, G::Mc)),
    (0x1B45, 0x1B4C, (L::Ak, G::Lo)),
    (0x1B4E, 0x1B4F, (L::Ba, G::Po)),
    (0x1B50, 0x1B59, (L::As, G::Nd)),
    (0x1B5A, 0x1B5B, (L::Ba, G::Po)),
    (0x1B5C, 0x1B5C, (L::Id, G::Po)),
    (0x1B5D, 0x1B60, (L::Ba, G::Po)),
    (0x1B61, 0x1B6A, (L::Id, G::So)),
    (0x1B6B, 0x1B73, (L::Cm, G::Mn)),
    (0x1B74, 0x1B7C, (L::Id, G::So)),
    (0x1B7D, 0x1B7F, (L::Ba, G::Po)),
    (0x1B80, 0x1B81, (L::Cm, G::Mn)),
    (0x1B82, 0x1B82, (L::Cm, G::Mc)),
    (0x1B83, 0x1BA0, (L::Al, G::Lo)),
    (0x1BA1, 0x1BA1, (L::Cm, G::Mc)),
    (0x1BA2, 0x1BA5, (L::Cm, G::Mn)),
    (0x1BA6, 0x1BA7, (L::Cm, G::Mc)),
    (0x1BA8, 0x1BA9, (L::Cm, G::Mn)),
    (0x1BAA, 0x1BAA, (L::Cm, G::Mc)),
    (0x1BAB, 0x1BAD, (L::Cm, G::Mn)),
    (0x1BAE, 0x1BAF, (L::Al, G::Lo)),
    (0x1BB0, 0x1BB9, (L::Nu, G::Nd)),
    (0x1BBA, 0x1BBF, (L::Al, G::Lo)),
    (0x1BC0, 0x1BE5, (L::As, G::Lo)),
    (0x1BE6, 0x1BE6, (L::Cm, G::Mn)),
    (0x1BE7, 0x1BE7, (L::Cm, G::Mc)),
    (0x1BE8, 0x1BE9, (L::Cm, G::Mn)),
    (0x1BEA, 0x1BEC, (L::Cm, G::Mc)),
    (0x1BED, 0x1BED, (L::Cm, G::Mn)),
    (0x1BEE, 0x1BEE, (L::Cm, G::Mc)),
    (0x1BEF, 0x1BF1, (L::Cm, G::Mn)),
    (0x1BF2, 0x1BF3, (L::Vf, G::Mc)),
    (0x1BFC, 0x1BFF, (L::Al, G::Po)),
    (0x1C00, 0x1C23, (L::Al, G::Lo)),
    (0x1C24, 0x1C2B, (L::Cm, G::Mc)),
    (0x1C2C, 0x1C33, (L::Cm, G::Mn)),
    (0x1C34, 0x1C35, (L::Cm, G::Mc)),
    (0x1C36, 0x1C37, (L::Cm, G::Mn)),
    (0x1C3B, 0x1C3F, (L::Ba, G::Po)),
    (0x1C40, 0x1C49, (L::Nu, G::Nd)),
    (0x1C4D, 0x1C4F, (L::Al, G::Lo)),
    (0x1C50, 0x1C59, (L::Nu, G::Nd)),
    (0x1C5A, 0x1C77, (L::Al, G::Lo)),
    (0x1C78, 0x1C7D, (L::Al, G::Lm)),
    (0x1C7E, 0x1C7F, (L::Ba, G::Po)),
    (0x1C80, 0x1C88, (L::Al, G::Ll)),
    (0x1C89, 0x1C89, (L::Al, G::Lu)),
    (0x1C8A, 0x1C8A, (L::Al, G::Ll)),
    (0x1C90, 0x1CBA, (L::Al, G::Lu)),
    (0x1CBD, 0x1CBF, (L::Al, G::Lu)),
    (0x1CC0, 0x1CC7, (L::Al, G::Po)),
    (0x1CD0, 0x1CD2, (L::Cm, G::Mn)),
    (0x1CD3, 0x1CD3, (L::Al, G::Po)),
    (0x1CD4, 0x1CE0, (L::Cm, G::Mn)),
    (0x1CE1, 0x1CE1, (L::Cm, G::Mc)),
    (0x1CE2, 0x1CE8, (L::Cm, G::Mn)),
    (0x1CE9, 0x1CEC, (L::Al, G::Lo)),
    (0x1CED, 0x1CED, (L::Cm, G::Mn)),
    (0x1CEE, 0x1CF3, (L::Al, G::Lo)),
    (0x1CF4, 0x1CF4, (L::Cm, G::Mn)),
    (0x1CF5, 0x1CF6, (L::Al, G::Lo)),
    (0x1CF7, 0x1CF7, (L::Cm, G::Mc)),
    (0x1CF8, 0x1CF9, (L::Cm, G::Mn)),
    (0x1CFA, 0x1CFA, (L::Al, G::Lo)),
    (0x1D00, 0x1D2B, (L::Al, G::Ll)),
    (0x1D2C, 0x1D6A, (L::Al, G::Lm)),
    (0x1D6B, 0x1D77, (L::Al, G::Ll)),
    (0x1D78, 0x1D78, (L::Al, G::Lm)),
    (0x1D79, 0x1D9A, (L::Al, G::Ll)),
    (0x1D9B, 0x1DBF, (L::Al, G::Lm)),
    (0x1DC0, 0x1DCC, (L::Cm, G::Mn)),
    (0x1DCD, 0x1DCD, (L::Gl, G::Mn)),
    (0x1DCE, 0x1DFB, (L::Cm, G::Mn)),
    (0x1DFC, 0x1DFC, (L::Gl, G::Mn)),
    (0x1DFD, 0x1DFF, (L::Cm, G::Mn)),
    (0x1E00, 0x1E00, (L::Al, G::Lu)),
    (0x1E01, 0x1E01, (L::Al, G::Ll)),
    (0x1E02, 0x1E02, (L::Al, G::Lu)),
    (0x1E03, 0x1E03, (L::Al, G::Ll)),
    (0x1E04, 0x1E04, (L::Al, G::Lu)),
    (0x1E05, 0x1E05, (L::Al, G::Ll)),
    (0x1E06, 0x1E06, (L::Al, G::Lu)),
    (0x1E07, 0x1E07, (L::Al, G::Ll)),
    (0x1E08, 0x1E08, (L::Al, G::Lu)),
    (0x1E09, 0x1E09, (L::Al, G::Ll)),
    (0x1E0A, 0x1E0A, (L::Al, G::Lu)),
    (0x1E0B, 0x1E0B, (L::Al, G::Ll)),
    (0x1E0C, 0x1E0C, (L::Al, G::Lu)),
    (0x1E0D, 0x1E0D, (L::Al, G::Ll)),
    (0x1E0E, 0x1E0E, (L::Al, G::Lu)),
    (0x1E0F, 0x1E0F, (L::Al, G::Ll)),
    (0x1E10, 0x1E10, (L::Al, G::Lu)),
    (0x1E11, 0x1E11, (L::Al, G::Ll)),
    (0x1E12, 0x1E12, (L::Al, G::Lu)),
    (0x1E13, 0x1E13, (L::Al, G::Ll)),
    (0x1E14, 0x1E14, (L::Al, G::Lu)),
    (0x1E15, 0x1E15, (L::Al, G::Ll)),
    (0x1E16, 0x1E16, (L::Al, G::Lu)),
    (0x1E17, 0x1E17, (L::Al, G::Ll)),
    (0x1E18, 0x1E18, (L::Al, G::Lu)),
    (0x1E19, 0x1E19, (L::Al, G::Ll)),
    (0x1E1A, 0x1E1A, (L::Al, G::Lu)),
    (0x1E1B, 0x1E1B, (L::Al, G::Ll)),
    (0x1E1C, 0x1E1C, (L::Al, G::Lu)),
    (0x1E1D, 0x1E1D, (L::Al, G::Ll)),
    (0x1E1E, 0x1E1E, (L::Al, G::Lu)),
    (0x1E1F, 0x1E1F, (L::Al, G::Ll)),
    (0x1E20, 0x1E20, (L::Al, G::Lu)),
    (0x1E21, 0x1E21, (L::Al, G::Ll)),
    (0x1E22, 0x1E22, (L::Al, G::Lu)),
    (0x1E23, 0x1E23, (L::Al, G::Ll)),
    (0x1E24, 0x1E24, (L::Al, G::Lu)),
    (0x1E25, 0x1E25, (L::Al, G::Ll)),
    (0x1E26, 0x1E26, (L::Al, G::Lu)),
    (0x1E27, 0x1E27, (L::Al, G::Ll)),
    (0x1E28, 0x1E28, (L::Al, G::Lu)),
    (0x1E29, 0x1E29, (L::Al, G::Ll)),
    (0x1E2A, 0x1E2A, (L::Al, G::Lu)),
    (0x1E2B, 0x1E2B, (L::Al, G::Ll)),
    (0x1E2C, 0x1E2C, (L::Al, G::Lu)),
    (0x1E2D, 0x1E2D, (L::Al, G::Ll)),
    (0x1E2E, 0x1E2E, (L::Al, G::Lu)),
    (0x1E2F, 0x1E2F, (L::Al, G::Ll)),
    (0x1E30, 0x1E30, (L::Al, G::Lu)),
    (0x1E31, 0x1E31, (L::Al, G::Ll)),
    (0x1E32, 0x1E32, (L::Al, G::Lu)),
    (0x1E33, 0x1E33, (L::Al, G::Ll)),
    (0x1E34, 0x1E34, (L::Al, G::Lu)),
    (0x1E35, 0x1E35, (L::Al, G::Ll)),
    (0x1E36, 0x1E36, (L::Al, G::Lu)),
    (0x1E37, 0x1E37, (L::Al, G::Ll)),
    (0x1E38, 0x1E38, (L::Al, G::Lu)),
    (0x1E39, 0x1E39, (L::Al, G::Ll)),
    (0x1E3A, 0x1E3A, (L::Al, G::Lu)),
    (0x1E3B, 0x1E3B, (L::Al, G::Ll)),
    (0x1E3C, 0x1E3C, (L::Al, G::Lu)),
    (0x1E3D, 0x1E3D, (L::Al, G::Ll)),
    (0x1E3E, 0x1E3E, (L::Al, G::Lu)),
    (0x1E3F, 0x1E3F, (L::Al, G::Ll)),
    (0x1E40, 0x1E40, (L::Al, G::Lu)),
    (0x1E41, 0x1E41, (L::Al, G::Ll)),
    (0x1E42, 0x1E42, (L::Al, G::Lu)),
    (0x1E43, 0x1E43, (L::Al, G::Ll)),
    (0x1E44, 0x1E44, (L::Al, G::Lu)),
    (0x1E45, 0x1E45, (L::Al, G::Ll)),
    (0x1E46, 0x1E46, (L::Al, G::Lu)),
    (0x1E47, 0x1E47, (L::Al, G::Ll)),
    (0x1E48, 0x1E48, (L::Al, G::Lu)),
    (0x1E49, 0x1E49, (L::Al, G::Ll)),
    (0x1E4A, 0x1E4A, (L::Al, G::Lu)),
    (0x1E4B, 0x1E4B, (L::Al, G::Ll)),
    (0x1E4C, 0x1E4C, (L::Al, G::Lu)),
    (0x1E4D, 0x1E4D, (L::Al, G::Ll)),
    (0x1E4E, 0x1E4E, (L::Al, G::Lu)),
    (0x1E4F, 0x1E4F, (L::Al, G::Ll)),
    (0x1E50, 0x1E50, (L::Al, G::Lu)),
    (0x1E51, 0x1E51, (L::Al, G::Ll)),
    (0x1E52, 0x1E52, (L::Al, G::Lu)),
    (0x1E53, 0x1E53, (L::Al, G::Ll)),
    (0x1E54, 0x1E54, (L::Al, G::Lu)),
    (0x1E55, 0x1E55, (L::Al, G::Ll)),
    (0x1E56, 0x1E56, (L::Al, G::Lu)),
    (0x1E57, 0x1E57, (L::Al, G::Ll)),
    (0x1E58, 0x1E58, (L::Al, G::Lu)),
    (0x1E59, 0x1E59, (L::Al, G::Ll)),
    (0x1E5A, 0x1E5A, (L::Al, G::Lu)),
    (0x1E5B, 0x1E5B, (L::Al, G::Ll)),
    (0x1E5C, 0x1E5C, (L::Al, G::Lu)),
    (0x1E5D, 0x1E5D, (L::Al, G::Ll)),
    (0x1E5E, 0x1E5E, (L::Al, G::Lu)),
    (0x1E5F, 0x1E5F, (L::Al, G::Ll)),
    (0x1E60, 0x1E60, (L::Al, G::Lu)),
    (0x1E61, 0x1E61, (L::Al, G::Ll)),
    (0x1E62, 0x1E62, (L::Al, G::Lu)),
    (0x1E63, 0x1E63, (L::Al, G::Ll)),
    (0x1E64, 0x1E64, (L::Al, G::Lu)),
    (0x1E65, 0x1E65, (L::Al, G::Ll)),
    (0x1E66, 0x1E66, (L::Al, G::Lu)),
    (0x1E67, 0x1E67, (L::Al, G::Ll)),
    (0x1E68, 0x1E68, (L::Al, G::Lu)),
    (0x1E69, 0x1E69, (L::Al, G::Ll)),
    (0x1E6A, 0x1E6A, (L::Al, G::Lu)),
    (0x1E6B, 0x1E6B, (L::Al, G::Ll)),
    (0x1E6C, 0x1E6C, (L::Al, G::Lu)),
    (0x1E6D, 0x1E6D, (L::Al, G::Ll)),
    (0x1E6E, 0x1E6E, (L::Al, G::Lu)),
    (0x1E6F, 0x1E6F, (L::Al, G::Ll)),
    (0x1E70, 0x1E70, (L::Al, G::Lu)),
    (0x1E71, 0x1E71, (L::Al, G::Ll)),
    (0x1E72, 0x1E72, (L::Al, G::Lu)),
    (0x1E73, 0x1E73, (L::Al, G::Ll)),
    (0x1E74, 0x1E74, (L::Al, G::Lu)),
    (0x1E75, 0x1E75, (L::Al, G::Ll)),
    (0x1E76, 0x1E76, (L::Al, G::Lu)),
    (0x1E77, 0x1E77, (L::Al, G::Ll)),
    (0x1E78, 0x1E78, (L::Al, G::Lu)),
    (0x1E79, 0x1E79, (L::Al, G::Ll)),
    (0x1E7A, 0x1E7A, (L::Al, G::Lu)),
    (0x1E7B, 0x1E7B, (L::Al, G::Ll)),
    (0x1E7C, 0x1E7C, (L::Al, G::Lu)),
    (0x1E7D, 0x1E7D, (L::Al, G::Ll)),
    (0x1E7E, 0x1E7E, (L::Al, G::Lu)),
    (0x1E7F, 0x1E7F, (L::Al, G::Ll)),
    (0x1E80, 0x1E80, (L::Al, G::Lu)),
    (0x1E81, 0x1E81, (L::Al, G::Ll)),
    (0x1E82, 0x1E82, (L::Al, G::Lu)),
    (0x1E83, 0x1E83, (L::Al, G::Ll)),
    (0x1E84, 0x1E84, (L::Al, G::Lu)),
    (0x1E85, 0x1E85, (L::Al, G::Ll)),
    (0x1E86, 0x1E86, (L::Al, G::Lu)),
    (0x1E87, 0x1E87, (L::Al, G::Ll)),
    (0x1E88, 0x1E88, (L::Al, G::Lu)),
    (0x1E89, 0x1E89, (L::Al, G::Ll)),
    (0x1E8A, 0x1E8A, (L::Al, G::Lu)),
    (0x1E8B, 0x1E8B, (L::Al, G::Ll)),
    (0x1E8C, 0x1E8C, (L::Al, G::Lu)),
    (0x1E8D, 0x1E8D, (L::Al, G::Ll)),
    (0x1E8E, 0x1E8E, (L::Al, G::Lu)),
    (0x1E8F, 0x1E8F, (L::Al, G::Ll)),
    (0x1E90, 0x1E90, (L::Al, G::Lu)),
    (0x1E91, 0x1E91, (L::Al, G::Ll)),
    (0x1E92, 0x1E92, (L::Al, G::Lu)),
    (0x1E93, 0x1E93, (L::Al, G::Ll)),
    (0x1E94, 0x1E94, (L::Al, G::Lu)),
    (0x1E95, 0x1E9D, (L::Al, G::Ll)),
    (0x1E9E, 0x1E9E, (L::Al, G::Lu)),
    (0x1E9F, 0x1E9F, (L::Al, G::Ll)),
    (0x1EA0, 0x1EA0, (L::Al, G::Lu)),
    (0x1EA1, 0x1EA1, (L::Al, G::Ll)),
    (0x1EA2, 0x1EA2, (L::Al, G::Lu)),
    (0x1EA3, 0x1EA3, (L::Al, G::Ll)),
    (0x1EA4, 0x1EA4, (L::Al, G::Lu)),
    (0x1EA5, 0x1EA5, (L::Al, G::Ll)),
    (0x1EA6, 0x1EA6, (L::Al, G::Lu)),
    (0x1EA7, 0x1EA7, (L::Al, G::Ll)),
    (0x1EA8, 0x1EA8, (L::Al, G::Lu)),
    (0x1EA9, 0x1EA9, (L::Al, G::Ll)),
    (0x1EAA, 0x1EAA, (L::Al, G::Lu)),
    (0x1EAB, 0x1EAB, (L::Al, G::Ll)),
    (0x1EAC, 0x1EAC, (L::Al, G::Lu)),
    (0x1EAD, 0x1EAD, (L::Al, G::Ll)),
    (0x1EAE, 0x1EAE, (L::Al, G::Lu)),
    (0x1EAF, 0x1EAF, (L::Al, G::Ll)),
    (0x1EB0, 0x1EB0, (L::Al, G::Lu)),
    (0x1EB1, 0x1EB1, (L::Al, G::Ll)),
    (0x1EB2, 0x1EB2, (L::Al, G::Lu)),
    (0x1EB3, 0x1EB3, (L::Al, G::Ll)),
    (0x1EB4, 0x1EB4, (L::Al, G::Lu)),
    (0x1EB5, 0x1EB5, (L::Al, G::Ll)),
    (0x1EB6, 0x1EB6, (L::Al, G::Lu)),
    (0x1EB7, 0x1EB7, (L::Al, G::Ll)),
    (0x1EB8, 0x1EB8, (L::Al, G::Lu)),
    (0x1EB9, 0x1EB9, (L::Al, G::Ll)),
    (0x1EBA, 0x1EBA, (L::Al, G::Lu)),
    (0x1EBB, 0x1EBB, (L::Al, G::Ll)),
    (0x1EBC, 0x1EBC, (L::Al, G::Lu)),
    (0x1EBD, 0x1EBD, (L::Al, G::Ll)),
    (0x1EBE, 0x1EBE, (L::Al, G::Lu)),
    (0x1EBF, 0x1EBF, (L::Al, G::Ll)),
    (0x1EC0, 0x1EC0, (L::Al, G::Lu)),
    (0x1EC1, 0x1EC1, (L::Al, G::Ll)),
    (0x1EC2, 0x1EC2, (L::Al, G::Lu)),
    (0x1EC3, 0x1EC3, (L::Al, G::Ll)),
    (0x1EC4, 0x1EC4, (L::Al, G::Lu)),
    (0x1EC5, 0x1EC5, (L::Al, G::Ll)),
    (0x1EC6, 0x1EC6, (L::Al, G::Lu)),
    (0x1EC7, 0x1EC7, (L::Al, G::Ll)),
    (0x1EC8, 0x1EC8, (L::Al, G::Lu)),
    (0x1EC9, 0x1EC9, (L::Al, G::Ll)),
    (0x1ECA, 0x1ECA, (L::Al, G::Lu)),
    (0x1ECB, 0x1ECB, (L::Al, G::Ll)),
    (0x1ECC, 0x1ECC, (L::Al, G::Lu)),
    (0x1ECD, 0x1ECD, (L::Al, G::Ll)),
    (0x1ECE, 0x1ECE, (L::Al, G::Lu)),
    (0x1ECF, 0x1ECF, (L::Al, G::Ll)),
    (0x1ED0, 0x1ED0, (L::Al, G::Lu)),
    (0x1ED1, 0x1ED1, (L::Al, G::Ll)),
    (0x1ED2, 0x1ED2, (L::Al, G::Lu)),
    (0x1ED3, 0x1ED3, (L::Al, G::Ll)),
    (0x1ED4, 0x1ED4, (L::Al, G::Lu)),
    (0x1ED5, 0x1ED5, (L::Al, G::Ll)),
    (0x1ED6, 0x1ED6, (L::Al, G::Lu)),
    (0x1ED7, 0x1ED7, (L::Al, G::Ll)),
    (0x1ED8, 0x1ED8, (L::Al, G::Lu)),
    (0x1ED9, 0x1ED9, (L::Al, G::Ll)),
    (0x1EDA, 0x1EDA, (L::Al, G::Lu)),
    (0x1EDB, 0x1EDB, (L::Al, G::Ll)),
    (0x1EDC, 0x1EDC, (L::Al, G::Lu)),
    (0x1EDD, 0x1EDD, (L::Al, G::Ll)),
    (0x1EDE, 0x1EDE, (L::Al, G::Lu)),
    (0x1EDF, 0x1EDF, (L::Al, G::Ll)),
    (0x1EE0, 0x1EE0, (L::Al, G::Lu)),
    (0x1EE1, 0x1EE1, (L::Al, G::Ll)),
    (0x1EE2, 0x1EE2, (L::Al, G::Lu)),
    (0x1EE3, 0x1EE3, (L::Al, G::Ll)),
    (0x1EE4, 0x1EE4, (L::Al, G::Lu)),
    (0x1EE5, 0x1EE5, (L::Al, G::Ll)),
    (0x1EE6, 0x1EE6, (L::Al, G::Lu)),
    (0x1EE7, 0x1EE7, (L::Al, G::Ll)),
    (0x1EE8, 0x1EE8, (L::Al, G::Lu)),
    (0x1EE9, 0x1EE9, (L::Al, G::Ll)),
    (0x1EEA, 0x1EEA, (L::Al, G::Lu)),
    (0x1EEB, 0x1EEB, (L::Al, G::Ll)),
    (0x1EEC, 0x1EEC, (L::Al, G::Lu)),
    (0x1EED, 0x1EED, (L::Al, G::Ll)),
    (0x1EEE, 0x1EEE, (L::Al, G::Lu)),
    (0x1EEF, 0x1EEF, (L::Al, G::Ll)),
    (0x1EF0, 0x1EF0, (L::Al, G::Lu)),
    (0x1EF1, 0x1EF1, (L::Al, G::Ll)),
    (0x1EF2, 0x1EF2, (L::Al, G::Lu)),
    (0x1EF3, 0x1EF3, (L::Al, G::Ll)),
    (0x1EF4, 0x1EF4, (L::Al, G::Lu)),
    (0x1EF5, 0x1EF5, (L::Al, G::Ll)),
    (0x1EF6, 0x1EF6, (L::Al, G::Lu)),
    (0x1EF7, 0x1EF7, (L::Al, G::Ll)),
    (0x1EF8, 0x1EF8, (L::Al, G::Lu)),
    (0x1EF9, 0x1EF9, (L::Al, G::Ll)),
    (0x1EFA, 0x1EFA, (L::Al, G::Lu)),
    (0x1EFB, 0x1EFB, (L::Al, G::Ll)),
    (0x1EFC, 0x1EFC, (L::Al, G::Lu)),
    (0x1EFD, 0x1EFD, (L::Al, G::Ll)),
    (0x1EFE, 0x1EFE, (L::Al, G::Lu)),
    (0x1EFF, 0x1F07, (L::Al, G::Ll)),
    (0x1F08, 0x1F0F, (L::Al, G::Lu)),
    (0x1F10, 0x1F15, (L::Al, G::Ll)),
    (0x1F18, 0x1F1D, (L::Al, G::Lu)),
    (0x1F20, 0x1F27, (L::Al, G::Ll)),
    (0x1F28, 0x1F2F, (L::Al, G::Lu)),
    (0x1F30, 0x1F37, (L::Al, G::Ll)),
    (0x1F38, 0x1F3F, (L::Al, G::Lu)),
    (0x1F40, 0x1F45, (L::Al, G::Ll)),
    (0x1F48, 0x1F4D, (L::Al, G::Lu)),
    (0x1F50, 0x1F57, (L::Al, G::Ll)),
    (0x1F59, 0x1F59, (L::Al, G::Lu)),
    (0x1F5B, 0x1F5B, (L::Al, G::Lu)),
    (0x1F5D, 0x1F5D, (L::Al, G::Lu)),
    (0x1F5F, 0x1F5F, (L::Al, G::Lu)),
    (0x1F60, 0x1F67, (L::Al, G::Ll)),
    (0x1F68, 0x1F6F, (L::Al, G::Lu)),
    (0x1F70, 0x1F7D, (L::Al, G::Ll)),
    (0x1F80, 0x1F87, (L::Al, G::Ll)),
    (0x1F88, 0x1F8F, (L::Al, G::Lt)),
    (0x1F90, 0x1F97, (L::Al, G::Ll)),
    (0x1F98, 0x1F9F, (L::Al, G::Lt)),
    (0x1FA0, 0x1FA7, (L::Al, G::Ll)),
    (0x1FA8, 0x1FAF, (L::Al, G::Lt)),
    (0x1FB0, 0x1FB4, (L::Al, G::Ll)),
    (0x1FB6, 0x1FB7, (L::Al, G::Ll)),
    (0x1FB8, 0x1FBB, (L::Al, G::Lu)),
    (0x1FBC, 0x1FBC, (L::Al, G::Lt)),
    (0x1FBD, 0x1FBD, (L::Al, G::Sk)),
    (0x1FBE, 0x1FBE, (L::Al, G::Ll)),
    (0x1FBF, 0x1FC1, (L::Al, G::Sk)),
    (0x1FC2, 0x1FC4, (L::Al, G::Ll)),
    (0x1FC6, 0x1FC7, (L::Al, G::Ll)),
    (0x1FC8, 0x1FCB, (L::Al, G::Lu)),
    (0x1FCC, 0x1FCC, (L::Al, G::Lt)),
    (0x1FCD, 0x1FCF, (L::Al, G::Sk)),
    (0x1FD0, 0x1FD3, (L::Al, G::Ll)),
    (0x1FD6, 0x1FD7, (L::Al, G::Ll)),
    (0x1FD8, 0x1FDB, (L::Al, G::Lu)),
    (0x1FDD, 0x1FDF, (L::Al, G::Sk)),
    (0x1FE0, 0x1FE7, (L::Al, G::Ll)),
    (0x1FE8, 0x1FEC, (L::Al, G::Lu)),
    (0x1FED, 0x1FEF, (L::Al, G::Sk)),
    (0x1FF2, 0x1FF4, (L::Al, G::Ll)),
    (0x1FF6, 0x1FF7, (L::Al, G::Ll)),
    (0x1FF8, 0x1FFB, (L::Al, G::Lu)),
    (0x1FFC, 0x1FFC, (L::Al, G::Lt)),
    (0x1FFD, 0x1FFD, (L::Bb, G::Sk)),
    (0x1FFE, 0x1FFE, (L::Al, G::Sk)),
    (0x2000, 0x2006, (L::Ba, G::Zs)),
    (0x2007, 0x2007, (L::Gl, G::Zs)),
    (0x2008, 0x200A, (L::Ba, G::Zs)),
    (0x200B, 0x200B, (L::Zw, G::Cf)),
    (0x200C, 0x200C, (L::Cm, G::Cf)),
    (0x200D, 0x200D, (L::Zwj, G::Cf)),
    (0x200E, 0x200F, (L::Cm, G::Cf)),
    (0x2011, 0x2011, (L::Gl, G::Pd)),
    (0x2014, 0x2014, (L::B2, G::Pd)),
    (0x2015, 0x2015, (L::Ai, G::Pd)),
    (0x2016, 0x2016, (L::Ai, G::Po)),
    (0x2017, 0x2017, (L::Al, G::Po)),
    (0x2018, 0x2018, (L::Qu, G::Pi)),
    (0x2019, 0x2019, (L::Qu, G::Pf)),
    (0x201A, 0x201A, (L::Op, G::Ps)),
    (0x201B, 0x201C, (L::Qu, G::Pi)),
    (0x201D, 0x201D, (L::Qu, G::Pf)),
    (0x201E, 0x201E, (L::Op, G::Ps)),
    (0x201F, 0x201F, (L::Qu, G::Pi)),
    (0x2020, 0x2021, (L::Ai, G::Po)),
    (0x2022, 0x2023, (L::Al, G::Po)),
    (0x2024, 0x2026, (L::In, G::Po)),
    (0x2027, 0x2027, (L::Ba, G::Po)),
    (0x2028, 0x2028, (L::Bk, G::Zl)),
    (0x2029, 0x2029, (L::Bk, G::Zp)),
    (0x202A, 0x202E, (L::Cm, G::Cf)),
    (0x202F, 0x202F, (L::Gl, G::Zs)),
    (0x2030, 0x2037, (L::Po, G::Po)),
    (0x2038, 0x2038, (L::Al, G::Po)),
    (0x2039, 0x2039, (L::Qu, G::Pi)),
    (0x203A, 0x203A, (L::Qu, G::Pf)),
    (0x203B, 0x203B, (L::Ai, G::Po)),
    (0x203C, 0x203D, (L::Ns, G::Po)),
    (0x203E, 0x203E, (L::Al, G::Po)),
    (0x203F, 0x2040, (L::Al, G::Pc)),
    (0x2041, 0x2043, (L::Al, G::Po)),
    (0x2044, 0x2044, (L::Is, G::Sm)),
    (0x2045, 0x2045, (L::Op, G::Ps)),
    (0x2046, 0x2046, (L::Cl, G::Pe)),
    (0x2047, 0x2049, (L::Ns, G::Po)),
    (0x204A, 0x2051, (L::Al, G::Po)),
    (0x2052, 0x2052, (L::Al, G::Sm)),
    (0x2053, 0x2053, (L::Al, G::Po)),
    (0x2054, 0x2054, (L::Al, G::Pc)),
    (0x2055, 0x2055, (L::Al, G::Po)),
    (0x2056, 0x2056, (L::Ba, G::Po)),
    (0x2057, 0x2057, (L::Po, G::Po)),
    (0x2058, 0x205B, (L::Ba, G::Po)),
    (0x205C, 0x205C, (L::Al, G::Po)),
    (0x205D, 0x205E, (L::Ba, G::Po)),
    (0x205F, 0x205F, (L::Ba, G::Zs)),
    (0x2060, 0x2060, (L::Wj, G::Cf)),
    (0x2061, 0x2064, (L::Al, G::Cf)),
    (0x2066, 0x206F, (L::Cm, G::Cf)),
    (0x2070, 0x2070, (L::Al, G::No)),
    (0x2071, 0x2071, (L::Al, G::Lm)),
    (0x2074, 0x2074, (L::Ai, G::No)),
    (0x2075, 0x2079, (L::Al, G::No)),
    (0x207A, 0x207C, (L::Al, G::Sm)),
    (0x207D, 0x207D, (L::Op, G::Ps)),
    (0x207E, 0x207E, (L::Cl, G::Pe)),
    (0x207F, 0x207F, (L::Ai, G::Lm)),
    (0x2080, 0x2080, (L::Al, G::No)),
    (0x2081, 0x2084, (L::Ai, G::No)),
    (0x2085, 0x2089, (L::Al, G::No)),
    (0x208A, 0x208C, (L::Al, G::Sm)),
    (0x208D, 0x208D, (L::Op, G::Ps)),
    (0x208E, 0x208E, (L::Cl, G::Pe)),
    (0x2090, 0x209C, (L::Al, G::Lm)),
    (0x20A0, 0x20A6, (L::Pr, G::Sc)),
    (0x20A7, 0x20A7, (L::Po, G::Sc)),
    (0x20A8, 0x20B5, (L::Pr, G::Sc)),
    (0x20B6, 0x20B6, (L::Po, G::Sc)),
    (0x20B7, 0x20BA, (L::Pr, G::Sc)),
    (0x20BB, 0x20BB, (L::Po, G::Sc)),
    (0x20BC, 0x20BD, (L::Pr, G::Sc)),
    (0x20BE, 0x20BE, (L::Po, G::Sc)),
    (0x20BF, 0x20BF, (L::Pr, G::Sc)),
    (0x20C0, 0x20C0, (L::Po, G::Sc)),
    (0x20C1, 0x20C1, (L::Pr, G::Sc)),
    (0x20C2, 0x20CF, (L::Pr, G::Cn)),
    (0x20D0, 0x20DC, (L::Cm, G::Mn)),
    (0x20DD, 0x20E0, (L::Cm, G::Me)),
    (0x20E1, 0x20E1, (L::Cm, G::Mn)),
    (0x20E2, 0x20E4, (L::Cm, G::Me)),
    (0x20E5, 0x20F0, (L::Cm, G::Mn)),
    (0x2100, 0x2101, (L::Al, G::So)),
    (0x2102, 0x2102, (L::Al, G::Lu)),
    (0x2103, 0x2103, (L::Po, G::So)),
    (0x2104, 0x2104, (L::Al, G::So)),
    (0x2105, 0x2105, (L::Ai, G::So)),
    (0x2106, 0x2106, (L::Al, G::So)),
    (0x2107, 0x2107, (L::Al, G::Lu)),
    (0x2108, 0x2108, (L::Al, G::So)),
    (0x2109, 0x2109, (L::Po, G::So)),
    (0x210A, 0x210A, (L::Al, G::Ll)),
    (0x210B, 0x210D, (L::Al, G::Lu)),
    (0x210E, 0x210F, (L::Al, G::Ll)),
    (0x2110, 0x2112, (L::Al, G::Lu)),
    (0x2113, 0x2113, (L::Ai, G::Ll)),
    (0x2114, 0x2114, (L::Al, G::So)),
    (0x2115, 0x2115, (L::Al, G::Lu)),
    (0x2116, 0x2116, (L::Pr, G::So)),
    (0x2117, 0x2117, (L::Al, G::So)),
    (0x2118, 0x2118, (L::Al, G::Sm)),
    (0x2119, 0x211D, (L::Al, G::Lu)),
    (0x211E, 0x2120, (L::Al, G::So)),
    (0x2121, 0x2122, (L::Ai, G::So)),
    (0x2123, 0x2123, (L::Al, G::So)),
    (0x2124, 0x2124, (L::Al, G::Lu)),
    (0x2125, 0x2125, (L::Al, G::So)),
    (0x2126, 0x2126, (L::Al, G::Lu)),
    (0x2127, 0x2127, (L::Al, G::So)),
    (0x2128, 0x2128, (L::Al, G::Lu)),
    (0x2129, 0x2129, (L::Al, G::So)),
    (0x212A, 0x212A, (L::Al, G::Lu)),
    (0x212B, 0x212B, (L::Ai, G::Lu)),
    (0x212C, 0x212D, (L::Al, G::Lu)),
    (0x212E, 0x212E, (L::Al, G::So)),
    (0x212F, 0x212F, (L::Al, G::Ll)),
    (0x2130, 0x2133, (L::Al, G::Lu)),
    (0x2134, 0x2134, (L::Al, G::Ll)),
    (0x2135, 0x2138, (L::Al, G::Lo)),
    (0x2139, 0x2139, (L::Al, G::Ll)),
    (0x213A, 0x213B, (L::Al, G::So)),
    (0x213C, 0x213D, (L::Al, G::Ll)),
    (0x213E, 0x213F, (L::Al, G::Lu)),
    (0x2140, 0x2144, (L::Al, G::Sm)),
    (0x2145, 0x2145, (L::Al, G::Lu)),
    (0x2146, 0x2149, (L::Al, G::Ll)),
    (0x214A, 0x214A, (L::Al, G::So)),
    (0x214B, 0x214B, (L::Al, G::Sm)),
    (0x214C, 0x214D, (L::Al, G::So)),
    (0x214E, 0x214E, (L::Al, G::Ll)),
    (0x214F, 0x214F, (L::Al, G::So)),
    (0x2150, 0x215E, (L::Ai, G::No)),
    (0x215F, 0x215F, (L::Al, G::No)),
    (0x2160, 0x216B, (L::Ai, G::Nl)),
    (0x216C, 0x216F, (L::Al, G::Nl)),
    (0x2170, 0x2179, (L::Ai, G::Nl)),
    (0x217A, 0x2182, (L::Al, G::Nl)),
    (0x2183, 0x2183, (L::Al, G::Lu)),
    (0x2184, 0x2184, (L::Al, G::Ll)),
    (0x2185, 0x2188, (L::Al, G::Nl)),
    (0x2189, 0x2189, (L::Ai, G::No)),
    (0x218A, 0x218B, (L::Al, G::So)),
    (0x2190, 0x2194, (L::Ai, G::Sm)),
    (0x2195, 0x2199, (L::Ai, G::So)),
    (0x219A, 0x219B, (L::Al, G::Sm)),
    (0x219C, 0x219F, (L::Al, G::So)),
    (0x21A0, 0x21A0, (L::Al, G::Sm)),
    (0x21A1, 0x21A2, (L::Al, G::So)),
    (0x21A3, 0x21A3, (L::Al, G::Sm)),
    (0x21A4, 0x21A5, (L::Al, G::So)),
    (0x21A6, 0x21A6, (L::Al, G::Sm)),
    (0x21A7, 0x21AD, (L::Al, G::So)),
    (0x21AE, 0x21AE, (L::Al, G::Sm)),
    (0x21AF, 0x21CD, (L::Al, G::So)),
    (0x21CE, 0x21CF, (L::Al, G::Sm)),
    (0x21D0, 0x21D1, (L::Al, G::So)),
    (0x21D2, 0x21D2, (L::Ai, G::Sm)),
    (0x21D3, 0x21D3, (L::Al, G::So)),
    (0x21D4, 0x21D4, (L::Ai, G::Sm)),
    (0x21D5, 0x21F3, (L::Al, G::So)),
    (0x21F4, 0x21FF, (L::Al, G::Sm)),
    (0x2200, 0x2200, (L::Ai, G::Sm)),
    (0x2201, 0x2201, (L::Al, G::Sm)),
    (0x2202, 0x2203, (L::Ai, G::Sm)),
    (0x2204, 0x2206, (L::Al, G::Sm)),
    (0x2207, 0x2208, (L::Ai, G::Sm)),
    (0x2209, 0x220A, (L::Al, G::Sm)),
    (0x220B, 0x220B, (L::Ai, G::Sm)),
    (0x220C, 0x220E, (L::Al, G::Sm)),
    (0x220F, 0x220F, (L::Ai, G::Sm)),
    (0x2210, 0x2210, (L::Al, G::Sm)),
    (0x2211, 0x2211, (L::Ai, G::Sm)),
    (0x2212, 0x2213, (L::Pr, G::Sm)),
    (0x2214, 0x2214, (L::Al, G::Sm)),
    (0x2215, 0x2215, (L::Ai, G::Sm)),
    (0x2216, 0x2219, (L::Al, G::Sm)),
    (0x221A, 0x221A, (L::Ai, G::Sm)),
    (0x221B, 0x221C, (L::Al, G::Sm)),
    (0x221D, 0x2220, (L::Ai, G::Sm)),
    (0x2221, 0x2222, (L::Al, G::Sm)),
    (0x2223, 0x2223, (L::Ai, G::Sm)),
    (0x2224, 0x2224, (L::Al, G::Sm)),
    (0x2225, 0x2225, (L::Ai, G::Sm)),
    (0x2226, 0x2226, (L::Al, G::Sm)),
    (0x2227, 0x222C, (L::Ai, G::Sm)),
    (0x222D, 0x222D, (L::Al, G::Sm)),
    (0x222E, 0x222E, (L::Ai, G::Sm)),
    (0x222F, 0x2233, (L::Al, G::Sm)),
    (0x2234, 0x2237, (L::Ai, G::Sm)),
    (0x2238, 0x223B, (L::Al, G::Sm)),
    (0x223C, 0x223D, (L::Ai, G::Sm)),
    (0x223E, 0x2247, (L::Al, G::Sm)),
    (0x2248, 0x2248, (L::Ai, G::Sm)),
    (0x2249, 0x224B, (L::Al, G::Sm)),
    (0x224C, 0x224C, (L::Ai, G::Sm)),
    (0x224D, 0x2251, (L::Al, G::Sm)),
    (0x2252, 0x2252, (L::Ai, G::Sm)),
    (0x2253, 0x225F, (L::Al, G::Sm)),
    (0x2260, 0x2261, (L::Ai, G::Sm)),
    (0x2262, 0x2263, (L::Al, G::Sm)),
    (0x2264, 0x2267, (L::Ai, G::Sm)),
    (0x2268, 0x2269, (L::Al, G::Sm)),
    (0x226A, 0x226B, (L::Ai, G::Sm)),
    (0x226C, 0x226D, (L::Al, G::Sm)),
    (0x226E, 0x226F, (L::Ai, G::Sm)),
    (0x2270, 0x2281, (L::Al, G::Sm)),
    (0x2282, 0x2283, (L::Ai, G::Sm)),
    (0x2284, 0x2285, (L::Al, G::Sm)),
    (0x2286, 0x2287, (L::Ai, G::Sm)),
    (0x2288, 0x2294, (L::Al, G::Sm)),
    (0x2295, 0x2295, (L::Ai, G::Sm)),
    (0x2296, 0x2298, (L::Al, G::Sm)),
    (0x2299, 0x2299, (L::Ai, G::Sm)),
    (0x229A, 0x22A4, (L::Al, G::Sm)),
    (0x22A5, 0x22A5, (L::Ai, G::Sm)),
    (0x22A6, 0x22BE, (L::Al, G::Sm)),
    (0x22BF, 0x22BF, (L::Ai, G::Sm)),
    (0x22C0, 0x22EE, (L::Al, G::Sm)),
    (0x22EF, 0x22EF, (L::In, G::Sm)),
    (0x22F0, 0x22FF, (L::Al, G::Sm)),
    (0x2300, 0x2307, (L::Al, G::So)),
    (0x2308, 0x2308, (L::Op, G::Ps)),
    (0x2309, 0x2309, (L::Cl, G::Pe)),
    (0x230A, 0x230A, (L::Op, G::Ps)),
    (0x230B, 0x230B, (L::Cl, G::Pe)),
    (0x230C, 0x2311, (L::Al, G::So)),
    (0x2312, 0x2312, (L::Ai, G::So)),
    (0x2313, 0x2319, (L::Al, G::So)),
    (0x231A, 0x231B, (L::Id, G::So)),
    (0x231C, 0x231F, (L::Al, G::So)),
    (0x2320, 0x2321, (L::Al, G::Sm)),
    (0x2322, 0x2328, (L::Al, G::So)),
    (0x2329, 0x2329, (L::Op, G::Ps)),
    (0x232A, 0x232A, (L::Cl, G::Pe)),
    (0x232B, 0x237B, (L::Al, G::So)),
    (0x237C, 0x237C, (L::Al, G::Sm)),
    (0x237D, 0x239A, (L::Al, G::So)),
    (0x239B, 0x23B3, (L::Al, G::Sm)),
    (0x23B4, 0x23DB, (L::Al, G::So)),
    (0x23DC, 0x23E1, (L::Al, G::Sm)),
    (0x23E2, 0x23EF, (L::Al, G::So)),
    (0x23F0, 0x23F3, (L::Id, G::So)),
    (0x23F4, 0x2429, (L::Al, G::So)),
    (0x2440, 0x244A, (L::Al, G::So)),
    (0x2460, 0x249B, (L::Ai, G::No)),
    (0x249C, 0x24E9, (L::Ai, G::So)),
    (0x24EA, 0x24FE, (L::Ai, G::No)),
    (0x24FF, 0x24FF, (L::Al, G::No)),
    (0x2500, 0x254B, (L::Ai, G::So)),
    (0x254C, 0x254F, (L::Al, G::So)),
    (0x2550, 0x2574, (L::Ai, G::So)),
    (0x2575, 0x257F, (L::Al, G::So)),
    (0x2580, 0x258F, (L::Ai, G::So)),
    (0x2590, 0x2591, (L::Al, G::So)),
    (0x2592, 0x2595, (L::Ai, G::So)),
    (0x2596, 0x259F, (L::Al, G::So)),
    (0x25A0, 0x25A1, (L::Ai, G::So)),
    (0x25A2, 0x25A2, (L::Al, G::So)),
    (0x25A3, 0x25A9, (L::Ai, G::So)),
    (0x25AA, 0x25B1, (L::Al, G::So)),
    (0x25B2, 0x25B3, (L::Ai, G::So)),
    (0x25B4, 0x25B5, (L::Al, G::So)),
    (0x25B6, 0x25B6, (L::Ai, G::So)),
    (0x25B7, 0x25B7, (L::Ai, G::Sm)),
    (0x25B8, 0x25BB, (L::Al, G::So)),
    (0x25BC, 0x25BD, (L::Ai, G::So)),
    (0x25BE, 0x25BF, (L::Al, G::So)),
    (0x25C0, 0x25C0, (L::Ai, G::So)),
    (0x25C1, 0x25C1, (L::Ai, G::Sm)),
    (0x25C2, 0x25C5, (L::Al, G::So)),
    (0x25C6, 0x25C8, (L::Ai, G::So)),
    (0x25C9, 0x25CA, (L::Al, G::So)),
    (0x25CB, 0x25CB, (L::Ai, G::So)),
    (0x25CC, 0x25CD, (L::Al, G::So)),
    (0x25CE, 0x25D1, (L::Ai, G::So)),
    (0x25D2, 0x25E1, (L::Al, G::So)),
    (0x25E2, 0x25E5, (L::Ai, G::So)),
    (0x25E6, 0x25EE, (L::Al, G::So)),
    (0x25EF, 0x25EF, (L::Ai, G::So)),
    (0x25F0, 0x25F7, (L::Al, G::So)),
    (0x25F8, 0x25FF, (L::Al, G::Sm)),
    (0x2600, 0x2603, (L::Id, G::So)),
    (0x2604, 0x2604, (L::Al, G::So)),
    (0x2605, 0x2606, (L::Ai, G::So)),
    (0x2607, 0x2608, (L::Al, G::So)),
    (0x2609, 0x2609, (L::Ai, G::So)),
    (0x260A, 0x260D, (L::Al, G::So)),
    (0x260E, 0x260F, (L::Ai, G::So)),
    (0x2610, 0x2613, (L::Al, G::So)),
    (0x2614, 0x2615, (L::Id, G::So)),
    (0x2616, 0x2617, (L::Ai, G::So)),
    (0x2618, 0x2618, (L::Id, G::So)),
    (0x2619, 0x2619, (L::Al, G::So)),
    (0x261A, 0x261C, (L::Id, G::So)),
    (0x261D, 0x261D, (L::Eb, G::So)),
    (0x261E, 0x261F, (L::Id, G::So)),
    (0x2620, 0x2638, (L::Al, G::So)),
    (0x2639, 0x263B, (L::Id, G::So)),
    (0x263C, 0x263F, (L::Al, G::So)),
    (0x2640, 0x2640, (L::Ai, G::So)),
    (0x2641, 0x2641, (L::Al, G::So)),
    (0x2642, 0x2642, (L::Ai, G::So)),
    (0x2643, 0x265F, (L::Al, G::So)),
    (0x2660, 0x2661, (L::Ai, G::So)),
    (0x2662, 0x2662, (L::Al, G::So)),
    (0x2663, 0x2665, (L::Ai, G::So)),
    (0x2666, 0x2666, (L::Al, G::So)),
    (0x2667, 0x2667, (L::Ai, G::So)),
    (0x2668, 0x2668, (L::Id, G::So)),
    (0x2669, 0x266A, (L::Ai, G::So)),
    (0x266B, 0x266B, (L::Al, G::So)),
    (0x266C, 0x266D, (L::Ai, G::So)),
    (0x266E, 0x266E, (L::Al, G::So)),
    (0x266F, 0x266F, (L::Ai, G::Sm)),
    (0x2670, 0x267E, (L::Al, G::So)),
    (0x267F, 0x267F, (L::Id, G::So)),
    (0x2680, 0x269D, (L::Al, G::So)),
    (0x269E, 0x269F, (L::Ai, G::So)),
    (0x26A0, 0x26BC, (L::Al, G::So)),
    (0x26BD, 0x26C8, (L::Id, G::So)),
    (0x26C9, 0x26CC, (L::Ai, G::So)),
    (0x26CD, 0x26CD, (L::Id, G::So)),
    (0x26CE, 0x26CE, (L::Al, G::So)),
    (0x26CF, 0x26D1, (L::Id, G::So)),
    (0x26D2, 0x26D2, (L::Ai, G::So)),
    (0x26D3, 0x26D4, (L::Id, G::So)),
    (0x26D5, 0x26D7, (L::Ai, G::So)),
    (0x26D8, 0x26D9, (L::Id, G::So)),
    (0x26DA, 0x26DB, (L::Ai, G::So)),
    (0x26DC, 0x26DC, (L::Id, G::So)),
    (0x26DD, 0x26DE, (L::Ai, G::So)),
    (0x26DF, 0x26E1, (L::Id, G::So)),
    (0x26E2, 0x26E2, (L::Al, G::So)),
    (0x26E3, 0x26E3, (L::Ai, G::So)),
    (0x26E4, 0x26E7, (L::Al, G::So)),
    (0x26E8, 0x26E9, (L::Ai, G::So)),
    (0x26EA, 0x26EA, (L::Id, G::So)),
    (0x26EB, 0x26F0, (L::Ai, G::So)),
    (0x26F1, 0x26F5, (L::Id, G::So)),
    (0x26F6, 0x26F6, (L::Ai, G::So)),
    (0x26F7, 0x26F8, (L::Id, G::So)),
    (0x26F9, 0x26F9, (L::Eb, G::So)),
    (0x26FA, 0x26FA, (L::Id, G::So)),
    (0x26FB, 0x26FC, (L::Ai, G::So)),
    (0x26FD, 0x2704, (L::Id, G::So)),
    (0x2705, 0x2707, (L::Al, G::So)),
    (0x2708, 0x2709, (L::Id, G::So)),
    (0x270A, 0x270D, (L::Eb, G::So)),
    (0x270E, 0x2756, (L::Al, G::So)),
    (0x2757, 0x2757, (L::Ai, G::So)),
    (0x2758, 0x275A, (L::Al, G::So)),
    (0x275B, 0x2760, (L::Qu, G::So)),
    (0x2761, 0x2761, (L::Al, G::So)),
    (0x2762, 0x2763, (L::Ex, G::So)),
    (0x2764, 0x2764, (L::Id, G::So)),
    (0x2765, 0x2767, (L::Al, G::So)),
    (0x2768, 0x2768, (L::Op, G::Ps)),
    (0x2769, 0x2769, (L::Cl, G::Pe)),
    (0x276A, 0x276A, (L::Op, G::Ps)),
    (0x276B, 0x276B, (L::Cl, G::Pe)),
    (0x276C, 0x276C, (L::Op, G::Ps)),
    (0x276D, 0x276D, (L::Cl, G::Pe)),
    (0x276E, 0x276E, (L::Op, G::Ps)),
    (0x276F, 0x276F, (L::Cl, G::Pe)),
    (0x2770, 0x2770, (L::Op, G::Ps)),
    (0x2771, 0x2771, (L::Cl, G::Pe)),
    (0x2772, 0x2772, (L::Op, G::Ps)),
    (0x2773, 0x2773, (L::Cl, G::Pe)),
    (0x2774, 0x2774, (L::Op, G::Ps)),
    (0x2775, 0x2775, (L::Cl, G::Pe)),
    (0x2776, 0x2793, (L::Ai, G::No)),
    (0x2794, 0x27BF, (L::Al, G::So)),
    (0x27C0, 0x27C4, (L::Al, G::Sm)),
    (0x27C5, 0x27C5, (L::Op, G::Ps)),
    (0x27C6, 0x27C6, (L::Cl, G::Pe)),
    (0x27C7, 0x27E5, (L::Al, G::Sm)),
    (0x27E6, 0x27E6, (L::Op, G::Ps)),
    (0x27E7, 0x27E7, (L::Cl, G::Pe)),
    (0x27E8, 0x27E8, (L::Op, G::Ps)),
    (0x27E9, 0x27E9, (L::Cl, G::Pe)),
    (0x27EA, 0x27EA, (L::Op, G::Ps)),
    (0x27EB, 0x27EB, (L::Cl, G::Pe)),
    (0x27EC, 0x27EC, (L::Op, G::Ps)),
    (0x27ED, 0x27ED, (L::Cl, G::Pe)),
    (0x27EE, 0x27EE, (L::Op, G::Ps)),
    (0x27EF, 0x27EF, (L::Cl, G::Pe)),
    (0x27F0, 0x27FF, (L::Al, G::Sm)),
    (0x2800, 0x2800, (L::Ba, G::So)),
    (0x2801, 0x28FF, (L::Al, G::So)),
    (0x2900, 0x2982, (L::Al, G::Sm)),
    (0x2983, 0x2983, (L::Op, G::Ps)),
    (0x2984, 0x2984, (L::Cl, G::Pe)),
    (0x2985, 0x2985, (L::Op, G::Ps)),
    (0x2986, 0x2986, (L::Cl, G::Pe)),
    (0x2987, 0x2987, (L::Op, G::Ps)),
    (0x2988, 0x2988, (L::Cl, G::Pe)),
    (0x2989, 0x2989, (L::Op, G::Ps)),
    (0x298A, 0x298A, (L::Cl, G::Pe)),
    (0x298B, 0x298B, (L::Op, G::Ps)),
    (0x298C, 0x298C, (L::Cl, G::Pe)),
    (0x298D, 0x298D, (L::Op, G::Ps)),
    (0x298E, 0x298E, (L::Cl, G::Pe)),
    (0x298F, 0x298F, (L::Op, G::Ps)),
    (0x2990, 0x2990, (L::Cl, G::Pe)),
    (0x2991, 0x2991, (L::Op, G::Ps)),
    (0x2992, 0x2992, (L::Cl, G::Pe)),
    (0x2993, 0x2993, (L::Op, G::Ps)),
    (0x2994, 0x2994, (L::Cl, G::Pe)),
    (0x2995, 0x2995, (L::Op, G::Ps)),
    (0x2996, 0x2996, (L::Cl, G::Pe)),
    (0x2997, 0x2997, (L::Op, G::Ps)),
    (0x2998, 0x2998, (L::Cl, G::Pe)),
    (0x2999, 0x29D7, (L::Al, G::Sm)),
    (0x29D8, 0x29D8, (L::Op, G::Ps)),
    (0x29D9, 0x29D9, (L::Cl, G::Pe)),
    (0x29DA, 0x29DA, (L::Op, G::Ps)),
    (0x29DB, 0x29DB, (L::Cl, G::Pe)),
    (0x29DC, 0x29FB, (L::Al, G::Sm)),
    (0x29FC, 0x29FC, (L::Op, G::Ps)),
    (0x29FD, 0x29FD, (L::Cl, G::Pe)),
    (0x29FE, 0x2AFF, (L::Al, G::Sm)),
    (0x2B00, 0x2B2F, (L::Al, G::So)),
    (0x2B30, 0x2B44, (L::Al, G::Sm)),
    (0x2B45, 0x2B46, (L::Al, G::So)),
    (0x2B47, 0x2B4C, (L::Al, G::Sm)),
    (0x2B4D, 0x2B54, (L::Al, G::So)),
    (0x2B55, 0x2B59, (L::Ai, G::So)),
    (0x2B5A, 0x2B73, (L::Al, G::So)),
    (0x2B76, 0x2BFF, (L::Al, G::So)),
    (0x2C00, 0x2C2F, (L::Al, G::Lu)),
    (0x2C30, 0x2C5F, (L::Al, G::Ll)),
    (0x2C60, 0x2C60, (L::Al, G::Lu)),
    (0x2C61, 0x2C61, (L::Al, G::Ll)),
    (0x2C62, 0x2C64, (L::Al, G::Lu)),
    (0x2C65, 0x2C66, (L::Al, G::Ll)),
    (0x2C67, 0x2C67, (L::Al, G::Lu)),
    (0x2C68, 0x2C68, (L::Al, G::Ll)),
    (0x2C69, 0x2C69, (L::Al, G::Lu)),
    (0x2C6A, 0x2C6A, (L::Al, G::Ll)),
    (0x2C6B, 0x2C6B, (L::Al, G::Lu)),
    (0x2C6C, 0x2C6C, (L::Al, G::Ll)),
    (0x2C6D, 0x2C70, (L::Al, G::Lu)),
    (0x2C71, 0x2C71, (L::Al, G::Ll)),
    (0x2C72, 0x2C72, (L::Al, G::Lu)),
    (0x2C73, 0x2C74, (L::Al, G::Ll)),
    (0x2C75, 0x2C75, (L::Al, G::Lu)),
    (0x2C76, 0x2C7B, (L::Al, G::Ll)),
    (0x2C7C, 0x2C7D, (L::Al, G::Lm)),
    (0x2C7E, 0x2C80, (L::Al, G::Lu)),
    (0x2C81, 0x2C81, (L::Al, G::Ll)),
    (0x2C82, 0x2C82, (L::Al, G::Lu)),
    (0x2C83, 0x2C83, (L::Al, G::Ll)),
    (0x2C84, 0x2C84, (L::Al, G::Lu)),
    (0x2C85, 0x2C85, (L::Al, G::Ll)),
    (0x2C86, 0x2C86, (L::Al, G::Lu)),
    (0x2C87, 0x2C87, (L::Al, G::Ll)),
    (0x2C88, 0x2C88, (L::Al, G::Lu)),
    (0x2C89, 0x2C89, (L::Al, G::Ll)),
    (0x2C8A, 0x2C8A, (L::Al, G::Lu)),
    (0x2C8B, 0x2C8B, (L::Al, G::Ll)),
    (0x2C8C, 0x2C8C, (L::Al, G::Lu)),
    (0x2C8D, 0x2C8D, (L::Al, G::Ll)),
    (0x2C8E, 0x2C8E, (L::Al, G::Lu)),
    (0x2C8F, 0x2C8F, (L::Al, G::Ll)),
    (0x2C90, 0x2C90, (L::Al, G::Lu)),
    (0x2C91, 0x2C91, (L::Al, G::Ll)),
    (0x2C92, 0x2C92, (L::Al, G::Lu)),
    (0x2C93, 0x2C93, (L::Al, G::Ll)),
    (0x2C94, 0x2C94, (L::Al, G::Lu)),
    (0x2C95, 0x2C95, (L::Al, G::Ll)),
    (0x2C96, 0x2C96, (L::Al, G::Lu)),
    (0x2C97, 0x2C97, (L::Al, G::Ll)),
    (0x2C98, 0x2C98, (L::Al, G::Lu)),
    (0x2C99, 0x2C99, (L::Al, G::Ll)),
    (0x2C9A, 0x2C9A, (L::Al, G::Lu)),
    (0x2C9B, 0x2C9B, (L::Al, G::Ll)),
    (0x2C9C, 0x2C9C, (L::Al, G::Lu)),
    (0x2C9D, 0x2C9D, (L::Al, G::Ll)),
    (0x2C9E, 0x2C9E, (L::Al, G::Lu)),
    (0x2C9F, 0x2C9F, (L::Al, G::Ll)),
    (0x2CA0, 0x2CA0, (L::Al, G::Lu)),
    (0x2CA1, 0x2CA1, (L::Al, G::Ll)),
    (0x2CA2, 0x2CA2, (L::Al, G::Lu)),
    (0x2CA3, 0x2CA3, (L::Al, G::Ll)),
    (0x2CA4, 0x2CA4, (L::Al, G::Lu)),
    (0x2CA5, 0x2CA5, (L::Al, G::Ll)),
    (0x2CA6, 0x2CA6, (L::Al, G::Lu)),
    (0x2CA7, 0x2CA7, (L::Al, G::Ll)),
    (0x2CA8, 0x2CA8, (L::Al, G::Lu)),
    (0x2CA9, 0x2CA9, (L::Al, G::Ll)),
    (0x2CAA, 0x2CAA, (L::Al, G::Lu)),
    (0x2CAB, 0x2CAB, (L::Al, G::Ll)),
    (0x2CAC, 0x2CAC, (L::Al, G::Lu)),
    (0x2CAD, 0x2CAD, (L::Al, G::Ll)),
    (0x2CAE, 0x2CAE, (L::Al, G::Lu)),
    (0x2CAF, 0x2CAF, (L::Al, G::Ll)),
    (0x2CB0, 0x2CB0, (L::Al, G::Lu)),
    (0x2CB1, 0x2CB1, (L::Al, G::Ll)),
    (0x2CB2, 0x2CB2, (L::Al, G::Lu)),
    (0x2CB3, 0x2CB3, (L::Al, G::Ll)),
    (0x2CB4, 0x2CB4, (L::Al, G::Lu)),
    (0x2CB5, 0x2CB5, (L::Al, G::Ll)),
    (0x2CB6, 0x2CB6, (L::Al, G::Lu)),
    (0x2CB7, 0x2CB7, (L::Al, G::Ll)),
    (0x2CB8, 0x2CB8, (L::Al, G::Lu)),
    (0x2CB9, 0x2CB9, (L::Al, G::Ll)),
    (0x2CBA, 0x2CBA, (L::Al, G::Lu)),
    (0x2CBB, 0x2CBB, (L::Al, G::Ll)),
    (0x2CBC, 0x2CBC, (L::Al, G::Lu)),
    (0x2CBD, 0x2CBD, (L::Al, G::Ll)),
    (0x2CBE, 0x2CBE, (L::Al, G::Lu)),
    (0x2CBF, 0x2CBF, (L::Al, G::Ll)),
    (0x2CC0, 0x2CC0, (L::Al, G::Lu)),
    (0x2CC1, 0x2CC1, (L::Al, G::Ll)),
    (0x2CC2, 0x2CC2, (L::Al, G::Lu)),
    (0x2CC3, 0x2CC3, (L::Al, G::Ll)),
    (0x2CC4, 0x2CC4, (L::Al, G::Lu)),
    (0x2CC5, 0x2CC5, (L::Al, G::Ll)),
    (0x2CC6, 0x2CC6, (L::Al, G::Lu)),
    (0x2CC7, 0x2CC7, (L::Al, G::Ll)),
    (0x2CC8, 0x2CC8, (L::Al, G::Lu)),
    (0x2CC9, 0x2CC9, (L::Al, G::Ll)),
    (0x2CCA, 0x2CCA, (L::Al, G::Lu)),
    (0x2CCB, 0x2CCB, (L::Al, G::Ll)),
    (0x2CCC, 0x2CCC, (L::Al, G::Lu)),
    (0x2CCD, 0x2CCD, (L::Al, G::Ll)),
    (0x2CCE, 0x2CCE, (L::Al, G::Lu)),
    (0x2CCF, 0x2CCF, (L::Al, G::Ll)),
    (0x2CD0, 0x2CD0, (L::Al, G::Lu)),
    (0x2CD1, 0x2CD1, (L::Al, G::Ll)),
    (0x2CD2, 0x2CD2, (L::Al, G::Lu)),
    (0x2CD3, 0x2CD3, (L::Al, G::Ll)),
    (0x2CD4, 0x2CD4, (L::Al, G::Lu)),
    (0x2CD5, 0x2CD5, (L::Al, G::Ll)),
    (0x2CD6, 0x2CD6, (L::Al, G::Lu)),
    (0x2CD7, 0x2CD7, (L::Al, G::Ll)),
    (0x2CD8, 0x2CD8, (L::Al, G::Lu)),
    (0x2CD9, 0x2CD9, (L::Al, G::Ll)),
    (0x2CDA, 0x2CDA, (L::Al, G::Lu)),
    (0x2CDB, 0x2CDB, (L::Al, G::Ll)),
    (0x2CDC, 0x2CDC, (L::Al, G::Lu)),
    (0x2CDD, 0x2CDD, (L::Al, G::Ll)),
    (0x2CDE, 0x2CDE, (L::Al, G::Lu)),
    (0x2CDF, 0x2CDF, (L::Al, G::Ll)),
    (0x2CE0, 0x2CE0, (L::Al, G::Lu)),
    (0x2CE1, 0x2CE1, (L::Al, G::Ll)),
    (0x2CE2, 0x2CE2, (L::Al, G::Lu)),
    (0x2CE3, 0x2CE4, (L::Al, G::Ll)),
    (0x2CE5, 0x2CEA, (L::Al, G::So)),
    (0x2CEB, 0x2CEB, (L::Al, G::Lu)),
    (0x2CEC, 0x2CEC, (L::Al, G::Ll)),
    (0x2CED, 0x2CED, (L::Al, G::Lu)),
    (0x2CEE, 0x2CEE, (L::Al, G::Ll)),
    (0x2CEF, 0x2CF1, (L::Cm, G::Mn)),
    (0x2CF2, 0x2CF2, (L::Al, G::Lu)),
    (0x2CF3, 0x2CF3, (L::Al, G::Ll)),
    (0x2CF9, 0x2CF9, (L::Ex, G::Po)),
    (0x2CFA, 0x2CFC, (L::Ba, G::Po)),
    (0x2CFD, 0x2CFD, (L::Al, G::No)),
    (0x2CFE, 0x2CFE, (L::Ex, G::Po)),
    (0x2CFF, 0x2CFF, (L::Ba, G::Po)),
    (0x2D00, 0x2D25, (L::Al, G::Ll)),
    (0x2D27, 0x2D27, (L::Al, G::Ll)),
    (0x2D2D, 0x2D2D, (L::Al, G::Ll)),
    (0x2D30, 0x2D67, (L::Al, G::Lo)),
    (0x2D6F, 0x2D6F, (L::Al, G::Lm)),
    (0x2D70, 0x2D70, (L::Ba, G::Po)),
    (0x2D7F, 0x2D7F, (L::Cm, G::Mn)),
    (0x2D80, 0x2D96, (L::Al, G::Lo)),
    (0x2DA0, 0x2DA6, (L::Al, G::Lo)),
    (0x2DA8, 0x2DAE, (L::Al, G::Lo)),
    (0x2DB0, 0x2DB6, (L::Al, G::Lo)),
    (0x2DB8, 0x2DBE, (L::Al, G::Lo)),
    (0x2DC0, 0x2DC6, (L::Al, G::Lo)),
    (0x2DC8, 0x2DCE, (L::Al, G::Lo)),
    (0x2DD0, 0x2DD6, (L::Al, G::Lo)),
    (0x2DD8, 0x2DDE, (L::Al, G::Lo)),
    (0x2DE0, 0x2DFF, (L::Cm, G::Mn)),
    (0x2E00, 0x2E01, (L::Qu, G::Po)),
    (0x2E02, 0x2E02, (L::Qu, G::Pi)),
    (0x2E03, 0x2E03, (L::Qu, G::Pf)),
    (0x2E04, 0x2E04, (L::Qu, G::Pi)),
    (0x2E05, 0x2E05, (L::Qu, G::Pf)),
    (0x2E06, 0x2E08, (L::Qu, G::Po)),
    (0x2E09, 0x2E09, (L::Qu, G::Pi)),
    (0x2E0A, 0x2E0A, (L::Qu, G::Pf)),
    (0x2E0B, 0x2E0B, (L::Qu, G::Po)),
    (0x2E0C, 0x2E0C, (L::Qu, G::Pi)),
    (0x2E0D, 0x2E0D, (L::Qu, G::Pf)),
    (0x2E0E, 0x2E15, (L::Ba, G::Po)),
    (0x2E16, 0x2E16, (L::Al, G::Po)),
    (0x2E18, 0x2E18, (L::Op, G::Po)),
    (0x2E19, 0x2E19, (L::Ba, G::Po)),
    (0x2E1A, 0x2E1A, (L::Al, G::Pd)),
    (0x2E1B, 0x2E1B, (L::Al, G::Po)),
    (0x2E1C, 0x2E1C, (L::Qu, G::Pi)),
    (0x2E1D, 0x2E1D, (L::Qu, G::Pf)),
    (0x2E1E, 0x2E1F, (L::Al, G::Po)),
    (0x2E20, 0x2E20, (L::Qu, G::Pi)),
    (0x2E21, 0x2E21, (L::Qu, G::Pf)),
    (0x2E22, 0x2E22, (L::Op, G::Ps)),
    (0x2E23, 0x2E23, (L::Cl, G::Pe)),
    (0x2E24, 0x2E24, (L::Op, G::Ps)),
    (0x2E25, 0x2E25, (L::Cl, G::Pe)),
    (0x2E26, 0x2E26, (L::Op, G::Ps)),
    (0x2E27, 0x2E27, (L::Cl, G::Pe)),
    (0x2E28, 0x2E28, (L::Op, G::Ps)),
    (0x2E29, 0x2E29, (L::Cl, G::Pe)),
    (0x2E2A, 0x2E2D, (L::Ba, G::Po)),
    (0x2E2E, 0x2E2E, (L::Ex, G::Po)),
    (0x2E2F, 0x2E2F, (L::Al, G::Lm)),
    (0x2E30, 0x2E31, (L::Ba, G::Po)),
    (0x2E32, 0x2E32, (L::Al, G::Po)),
    (0x2E33, 0x2E34, (L::Ba, G::Po)),
    (0x2E35, 0x2E39, (L::Al, G::Po)),
    (0x2E3A, 0x2E3B, (L::B2, G::Pd)),
    (0x2E3C, 0x2E3E, (L::Ba, G::Po)),
    (0x2E3F, 0x2E3F, (L::Al, G::Po)),
    (0x2E41, 0x2E41, (L::Ba, G::Po)),
    (0x2E42, 0x2E42, (L::Op, G::Ps)),
    (0x2E43, 0x2E4A, (L::Ba, G::Po)),
    (0x2E4B, 0x2E4B, (L::Al, G::Po)),
    (0x2E4C, 0x2E4C, (L::Ba, G::Po)),
    (0x2E4D, 0x2E4D, (L::Al, G::Po)),
    (0x2E4E, 0x2E4F, (L::Ba, G::Po)),
    (0x2E50, 0x2E51, (L::Al, G::So)),
    (0x2E52, 0x2E52, (L::Al, G::Po)),
    (0x2E53, 0x2E54, (L::Ex, G::Po)),
    (0x2E55, 0x2E55, (L::Op, G::Ps)),
    (0x2E56, 0x2E56, (L::Cp, G::Pe)),
    (0x2E57, 0x2E57, (L::Op, G::Ps)),
    (0x2E58, 0x2E58, (L::Cp, G::Pe)),
    (0x2E59, 0x2E59, (L::Op, G::Ps)),
    (0x2E5A, 0x2E5A, (L::Cp, G::Pe)),
    (0x2E5B, 0x2E5B, (L::Op, G::Ps)),
    (0x2E5C, 0x2E5C, (L::Cp, G::Pe)),
    (0x2E80, 0x2E99, (L::Id, G::So)),
    (0x2E9B, 0x2EF3, (L::Id, G::So)),
    (0x2F00, 0x2FD5, (L::Id, G::So)),
    (0x2FF0, 0x2FFF, (L::Id, G::So)),
    (0x3000, 0x3000, (L::Ba, G::Zs)),
    (0x3001, 0x3002, (L::Cl, G::Po)),
    (0x3003, 0x3003, (L::Id, G::Po)),
    (0x3004, 0x3004, (L::Id, G::So)),
    (0x3005, 0x3005, (L::Ns, G::Lm)),
    (0x3006, 0x3006, (L::Id, G::Lo)),
    (0x3007, 0x3007, (L::Id, G::Nl)),
    (0x3008, 0x3008, (L::Op, G::Ps)),
    (0x3009, 0x3009, (L::Cl, G::Pe)),
    (0x300A, 0x300A, (L::Op, G::Ps)),
    (0x300B, 0x300B, (L::Cl, G::Pe)),
    (0x300C, 0x300C, (L::Op, G::Ps)),
    (0x300D, 0x300D, (L::Cl, G::Pe)),
    (0x300E, 0x300E, (L::Op, G::Ps)),
    (0x300F, 0x300F, (L::Cl, G::Pe)),
    (0x3010, 0x3010, (L::Op, G::Ps)),
    (0x3011, 0x3011, (L::Cl, G::Pe)),
    (0x3012, 0x3013, (L::Id, G::So)),
    (0x3014, 0x3014, (L::Op, G::Ps)),
    (0x3015, 0x3015, (L::Cl, G::Pe)),
    (0x3016, 0x3016, (L::Op, G::Ps)),
    (0x3017, 0x3017, (L::Cl, G::Pe)),
    (0x3018, 0x3018, (L::Op, G::Ps)),
    (0x3019, 0x3019, (L::Cl, G::Pe)),
    (0x301A, 0x301A, (L::Op, G::Ps)),
    (0x301B, 0x301B, (L::Cl, G::Pe)),
    (0x301C, 0x301C, (L::Ns, G::Pd)),
    (0x301D, 0x301D, (L::Op, G::Ps)),
    (0x301E, 0x301F, (L::Cl, G::Pe)),
    (0x3020, 0x3020, (L::Id, G::So)),
    (0x3021, 0x3029, (L::Id, G::Nl)),
    (0x302A, 0x302D, (L::Cm, G::Mn)),
    (0x302E, 0x302F, (L::Cm, G::Mc)),
    (0x3030, 0x3030, (L::Id, G::Pd)),
    (0x3031, 0x3034, (L::Id, G::Lm)),
    (0x3035, 0x3035, (L::Cm, G::Lm)),
    (0x3036, 0x3037, (L::Id, G::So)),
    (0x3038, 0x303A, (L::Id, G::Nl)),
    (0x303B, 0x303B, (L::Ns, G::Lm)),
    (0x303C, 0x303C, (L::Ns, G::Lo)),
    (0x303D, 0x303D, (L::Id, G::Po)),
    (0x303E, 0x303F, (L::Id, G::So)),
    (0x3041, 0x3041, (L::Cj, G::Lo)),
    (0x3042, 0x3042, (L::Id, G::Lo)),
    (0x3043, 0x3043, (L::Cj, G::Lo)),
    (0x3044, 0x3044, (L::Id, G::Lo)),
    (0x3045, 0x3045, (L::Cj, G::Lo)),
    (0x3046, 0x3046, (L::Id, G::Lo)),
    (0x3047, 0x3047, (L::Cj, G::Lo)),
    (0x3048, 0x3048, (L::Id, G::Lo)),
    (0x3049, 0x3049, (L::Cj, G::Lo)),
    (0x304A, 0x3062, (L::Id, G::Lo)),
    (0x3063, 0x3063, (L::Cj, G::Lo)),
    (0x3064, 0x3082, (L::Id, G::Lo)),
    (0x3083, 0x3083, (L::Cj, G::Lo)),
    (0x3084, 0x3084, (L::Id, G::Lo)),
    (0x3085, 0x3085, (L::Cj, G::Lo)),
    (0x3086, 0x3086, (L::Id, G::Lo)),
    (0x3087, 0x3087, (L::Cj, G::Lo)),
    (0x3088, 0x308D, (L::Id, G::Lo)),
    (0x308E, 0x308E, (L::Cj, G::Lo)),
    (0x308F, 0x3094, (L::Id, G::Lo)),
    (0x3095, 0x3096, (L::Cj, G::Lo)),
    (0x3099, 0x309A, (L::Cm, G::Mn)),
    (0x309B, 0x309C, (L::Ns, G::Sk)),
    (0x309D, 0x309E, (L::Ns, G::Lm)),
    (0x309F, 0x309F, (L::Id, G::Lo)),
    (0x30A0, 0x30A0, (L::Ns, G::Pd)),
    (0x30A1, 0x30A1, (L::Cj, G::Lo)),
    (0x30A2, 0x30A2, (L::Id, G::Lo)),
    (0x30A3, 0x30A3, (L::Cj, G::Lo)),
    (0x30A4, 0x30A4, (L::Id, G::Lo)),
    (0x30A5, 0x30A5, (L::Cj, G::Lo)),
    (0x30A6, 0x30A6, (L::Id, G::Lo)),
    (0x30A7, 0x30A7, (L::Cj, G::Lo)),
    (0x30A8, 0x30A8, (L::Id, G::Lo)),
    (0x30A9, 0x30A9, (L::Cj, G::Lo)),
    (0x30AA, 0x30C2, (L::Id, G::Lo)),
    (0x30C3, 0x30C3, (L::Cj, G::Lo)),
    (0x30C4, 0x30E2, (L::Id, G::Lo)),
    (0x30E3, 0x30E3, (L::Cj, G::Lo)),
    (0x30E4, 0x30E4, (L::Id, G::Lo)),
    (0x30E5, 0x30E5, (L::Cj, G::Lo)),
    (0x30E6, 0x30E6, (L::Id, G::Lo)),
    (0x30E7, 0x30E7, (L::Cj, G::Lo)),
    (0x30E8, 0x30ED, (L::Id, G::Lo)),
    (0x30EE, 0x30EE, (L::Cj, G::Lo)),
    (0x30EF, 0x30F4, (L::Id, G::Lo)),
    (0x30F5, 0x30F6, (L::Cj, G::Lo)),
    (0x30F7, 0x30FA, (L::Id, G::Lo)),
    (0x30FB, 0x30FB, (L::Ns, G::Po)),
    (0x30FC, 0x30FC, (L::Cj, G::Lm)),
    (0x30FD, 0x30FE, (L::Ns, G::Lm)),
    (0x30FF, 0x30FF, (L::Id, G::Lo)),
    (0x3105, 0x312F, (L::Id, G::Lo)),
    (0x3131, 0x318E, (L::Id, G::Lo)),
    (0x3190, 0x3191, (L::Id, G::So)),
    (0x3192, 0x3195, (L::Id, G::No)),
    (0x3196, 0x319F, (L::Id, G::So)),
    (0x31A0, 0x31BF, (L::Id, G::Lo)),
    (0x31C0, 0x31E5, (L::Id, G::So)),
    (0x31EF, 0x31EF, (L::Id, G::So)),
    (0x31F0, 0x31FF, (L::Cj, G::Lo)),
    (0x3200, 0x321E, (L::Id, G::So)),
    (0x3220, 0x3229, (L::Id, G::No)),
    (0x322A, 0x3247, (L::Id, G::So)),
    (0x3248, 0x324F, (L::Ai, G::No)),
    (0x3250, 0x3250, (L::Id, G::So)),
    (0x3251, 0x325F, (L::Id, G::No)),
    (0x3260, 0x327F, (L::Id, G::So)),
    (0x3280, 0x3289, (L::Id, G::No)),
    (0x328A, 0x32B0, (L::Id, G::So)),
    (0x32B1, 0x32BF, (L::Id, G::No)),
    (0x32C0, 0x33FF, (L::Id, G::So)),
    (0x3400, 0x4DBF, (L::Id, G::Lo)),
    (0x4DC0, 0x4DFF, (L::Al, G::So)),
    (0x4E00, 0xA014, (L::Id, G::Lo)),
    (0xA015, 0xA015, (L::Ns, G::Lm)),
    (0xA016, 0xA48C, (L::Id, G::Lo)),
    (0xA490, 0xA4C6, (L::Id, G::So)),
    (0xA4D0, 0xA4F7, (L::Al, G::Lo)),
    (0xA4F8, 0xA4FD, (L::Al, G::Lm)),
    (0xA4FE, 0xA4FF, (L::Ba, G::Po)),
    (0xA500, 0xA60B, (L::Al, G::Lo)),
    (0xA60C, 0xA60C, (L::Al, G::Lm)),
    (0xA60D, 0xA60D, (L::Ba, G::Po)),
    (0xA60E, 0xA60E, (L::Ex, G::Po)),
    (0xA60F, 0xA60F, (L::Ba, G::Po)),
    (0xA610, 0xA61F, (L::Al, G::Lo)),
    (0xA620, 0xA629, (L::Nu, G::Nd)),
    (0xA62A, 0xA62B, (L::Al, G::Lo)),
    (0xA640, 0xA640, (L::Al, G::Lu)),
    (0xA641, 0xA641, (L::Al, G::Ll)),
    (0xA642, 0xA642, (L::Al, G::Lu)),
    (0xA643, 0xA643, (L::Al, G::Ll)),
    (0xA644, 0xA644, (L::Al, G::Lu)),
    (0xA645, 0xA645, (L::Al, G::Ll)),
    (0xA646, 0xA646, (L::Al, G::Lu)),
    (0xA647, 0xA647, (L::Al, G::Ll)),
    (0xA648, 0xA648, (L::Al, G::Lu)),
    (0xA649, 0xA649, (L::Al, G::Ll)),
    (0xA64A, 0xA64A, (L::Al, G::Lu)),
    (0xA64B, 0xA64B, (L::Al, G::Ll)),
    (0xA64C, 0xA64C, (L::Al, G::Lu)),
    (0xA64D, 0xA64D, (L::Al, G::Ll)),
    (0xA64E, 0xA64E, (L::Al, G::Lu)),
    (0xA64F, 0xA64F, (L::Al, G::Ll)),
    (0xA650, 0xA650, (L::Al, G::Lu)),
    (0xA651, 0xA651, (L::Al, G::Ll)),
    (0xA652, 0xA652, (L::Al, G::Lu)),
    (0xA653, 0xA653, (L::Al, G::Ll)),
    (0xA654, 0xA654, (L::Al, G::Lu)),
    (0xA655, 0xA655, (L::Al, G::Ll)),
    (0xA656, 0xA656, (L::Al, G::Lu)),
    (0xA657, 0xA657, (L::Al, G::Ll)),
    (0xA658, 0xA658, (L::Al, G::Lu)),
    (0xA659, 0xA659, (L::Al, G::Ll)),
    (0xA65A, 0xA65A, (L::Al, G::Lu)),
    (0xA65B, 0xA65B, (L::Al, G::Ll)),
    (0xA65C, 0xA65C, (L::Al, G::Lu)),
    (0xA65D, 0xA65D, (L::Al, G::Ll)),
    (0xA65E, 0xA65E, (L::Al, G::Lu)),
    (0xA65F, 0xA65F, (L::Al, G::Ll)),
    (0xA660, 0xA660, (L::Al, G::Lu)),
    (0xA661, 0xA661, (L::Al, G::Ll)),
    (0xA662, 0xA662, (L::Al, G::Lu)),
    (0xA663, 0xA663, (L::Al, G::Ll)),
    (0xA664, 0xA664, (L::Al, G::Lu)),
    (0xA665, 0xA665, (L::Al, G::Ll)),
    (0xA666, 0xA666, (L::Al, G::Lu)),
    (0xA667, 0xA667, (L::Al, G::Ll)),
    (0xA668, 0xA668, (L::Al, G::Lu)),
    (0xA669, 0xA669, (L::Al, G::Ll)),
    (0xA66A, 0xA66A, (L::Al, G::Lu)),
    (0xA66B, 0xA66B, (L::Al, G::Ll)),
    (0xA66C, 0xA66C, (L::Al, G::Lu)),
    (0xA66D, 0xA66D, (L::Al, G::Ll)),
    (0xA66E, 0xA66E, (L::Al, G::Lo)),
    (0xA66F, 0xA66F, (L::Cm, G::Mn)),
    (0xA670, 0xA672, (L::Cm, G::Me)),
    (0xA673, 0xA673, (L::Al, G::Po)),
    (0xA674, 0xA67D, (L::Cm, G::Mn)),
    (0xA67E, 0xA67E, (L::Al, G::Po)),
    (0xA67F, 0xA67F, (L::Al, G::Lm)),
    (0xA680, 0xA680, (L::Al, G::Lu)),
    (0xA681, 0xA681, (L::Al, G::Ll)),
    (0xA682, 0xA682, (L::Al, G::Lu)),
    (0xA683, 0xA683, (L::Al, G::Ll)),
    (0xA684, 0xA684, (L::Al, G::Lu)),
    (0xA685, 0xA685, (L::Al, G::Ll)),
    (0xA686, 0xA686, (L::Al, G::Lu)),
    (0xA687, 0xA687, (L::Al, G::Ll)),
    (0xA688, 0xA688, (L::Al, G::Lu)),
    (0xA689, 0xA689, (L::Al, G::Ll)),
    (0xA68A, 0xA68A, (L::Al, G::Lu)),
    (0xA68B, 0xA68B, (L::Al, G::Ll)),
    (0xA68C, 0xA68C, (L::Al, G::Lu)),
    (0xA68D, 0xA68D, (L::Al, G::Ll)),
    (0xA68E, 0xA68E, (L::Al, G::Lu)),
    (0xA68F, 0xA68F, (L::Al, G::Ll)),
    (0xA690, 0xA690, (L::Al, G::Lu)),
    (0xA691, 0xA691, (L::Al, G::Ll)),
    (0xA692, 0xA692, (L::Al, G::Lu)),
    (0xA693, 0xA693, (L::Al, G::Ll)),
    (0xA694, 0xA694, (L::Al, G::Lu)),
    (0xA695, 0xA695, (L::Al, G::Ll)),
    (0xA696, 0xA696, (L::Al, G::Lu)),
    (0xA697, 0xA697, (L::Al, G::Ll)),
    (0xA698, 0xA698, (L::Al, G::Lu)),
    (0xA699, 0xA699, (L::Al, G::Ll)),
    (0xA69A, 0xA69A, (L::Al, G::Lu)),
    (0xA69B, 0xA69B, (L::Al, G::Ll)),
    (0xA69C, 0xA69D, (L::Al, G::Lm)),
    (0xA69E, 0xA69F, (L::Cm, G::Mn)),
    (0xA6A0, 0xA6E5, (L::Al, G::Lo)),
    (0xA6E6, 0xA6EF, (L::Al, G::Nl)),
    (0xA6F0, 0xA6F1, (L::Cm, G::Mn)),
    (0xA6F2, 0xA6F2, (L::Al, G::Po)),
    (0xA6F3, 0xA6F7, (L::Ba, G::Po)),
    (0xA700, 0xA716, (L::Al, G::Sk)),
    (0xA717, 0xA71F, (L::Al, G::Lm)),
    (0xA720, 0xA721, (L::Al, G::Sk)),
    (0xA722, 0xA722, (L::Al, G::Lu)),
    (0xA723, 0xA723, (L::Al, G::Ll)),
    (0xA724, 0xA724, (L::Al, G::Lu)),
    (0xA725, 0xA725, (L::Al, G::Ll)),
    (0xA726, 0xA726, (L::Al, G::Lu)),
    (0xA727, 0xA727, (L::Al, G::Ll)),
    (0xA728, 0xA728, (L::Al, G::Lu)),
    (0xA729, 0xA729, (L::Al, G::Ll)),
    (0xA72A, 0xA72A, (L::Al, G::Lu)),
    (0xA72B, 0xA72B, (L::Al, G::Ll)),
    (0xA72C, 0xA72C, (L::Al, G::Lu)),
    (0xA72D, 0xA72D, (L::Al, G::Ll)),
    (0xA72E, 0xA72E, (L::Al, G::Lu)),
    (0xA72F, 0xA731, (L::Al, G::Ll)),
    (0xA732, 0xA732, (L::Al, G::Lu)),
    (0xA733, 0xA733, (L::Al, G::Ll)),
    (0xA734, 0xA734, (L::Al, G::Lu)),
    (0xA735, 0xA735, (L::Al, G::Ll)),
    (0xA736, 0xA736, (L::Al, G::Lu)),
    (0xA737, 0xA737, (L::Al, G::Ll)),
    (0xA738, 0xA738, (L::Al, G::Lu)),
    (0xA739, 0xA739, (L::Al, G::Ll)),
    (0xA73A, 0xA73A, (L::Al, G::Lu)),
    (0xA73B, 0xA73B, (L::Al, G::Ll)),
    (0xA73C, 0xA73C, (L::Al, G::Lu)),
    (0xA73D, 0xA73D, (L::Al, G::Ll)),
    (0xA73E, 0xA73E, (L::Al, G::Lu)),
    (0xA73F, 0xA73F, (L::Al, G::Ll)),
    (0xA740, 0xA740, (L::Al, G::Lu)),
    (0xA741, 0xA741, (L::Al, G::Ll)),
    (0xA742, 0xA742, (L::Al, G::Lu)),
    (0xA743, 0xA743, (L::Al, G::Ll)),
    (0xA744, 0xA744, (L::Al, G::Lu)),
    (0xA745, 0xA745, (L::Al, G::Ll)),
    (0xA746, 0xA746, (L::Al, G::Lu)),
    (0xA747, 0xA747, (L::Al, G::Ll)),
    (0xA748, 0xA748, (L::Al, G::Lu)),
    (0xA749, 0xA749, (L::Al, G::Ll)),
    (0xA74A, 0xA74A, (L::Al, G::Lu)),
    (0xA74B, 0xA74B, (L::Al, G::Ll)),
    (0xA74C, 0xA74C, (L::Al, G::Lu)),
    (0xA74D, 0xA74D, (L::Al, G::Ll)),
    (0xA74E, 0xA74E, (L::Al, G::Lu)),
    (0xA74F, 0xA74F, (L::Al, G::Ll)),
    (0xA750, 0xA750, (L::Al, G::Lu)),
    (0xA751, 0xA751, (L::Al, G::Ll)),
    (0xA752, 0xA752, (L::Al, G::Lu)),
    (0xA753, 0xA753, (L::Al, G::Ll)),
    (0xA754, 0xA754, (L::Al, G::Lu)),
    (0xA755, 0xA755, (L::Al, G::Ll)),
    (0xA756, 0xA756, (L::Al, G::Lu)),
    (0xA757, 0xA757, (L::Al, G::Ll)),
    (0xA758, 0xA758, (L::Al, G::Lu)),
    (0xA759, 0xA759, (L::Al, G::Ll)),
    (0xA75A, 0xA75A, (L::Al, G::Lu)),
    (0xA75B, 0xA75B, (L::Al, G::Ll)),
    (0xA75C, 0xA75C, (L::Al, G::Lu)),
    (0xA75D, 0xA75D, (L::Al, G::Ll)),
    (0xA75E, 0xA75E, (L::Al, G::Lu)),
    (0xA75F, 0xA75F, (L::Al, G::Ll)),
    (0xA760, 0xA760, (L::Al, G::Lu)),
    (0xA761, 0xA761, (L::Al, G::Ll)),
    (0xA762, 0xA762, (L::Al, G::Lu)),
    (0xA763, 0xA763, (L::Al, G::Ll)),
    (0xA764, 0xA764, (L::Al, G::Lu)),
    (0xA765, 0xA765, (L::Al, G::Ll)),
    (0xA766, 0xA766, (L::Al, G::Lu)),
    (0xA767, 0xA767, (L::Al, G::Ll)),
    (0xA768, 0xA768, (L::Al, G::Lu)),
    (0xA769, 0xA769, (L::Al, G::Ll)),
    (0xA76A, 0xA76A, (L::Al, G::Lu)),
    (0xA76B, 0xA76B, (L::Al, G::Ll)),
    (0xA76C, 0xA76C, (L::Al, G::Lu)),
    (0xA76D, 0xA76D, (L::Al, G::Ll)),
    (0xA76E, 0xA76E, (L::Al, G::Lu)),
    (0xA76F, 0xA76F, (L::Al, G::Ll)),
    (0xA770, 0xA770, (L::Al, G::Lm)),
    (0xA771, 0xA778, (L::Al, G::Ll)),
    (0xA779, 0xA779, (L::Al, G::Lu)),
    (0xA77A, 0xA77A, (L::Al, G::Ll)),
    (0xA77B, 0xA77B, (L::Al, G::Lu)),
    (0xA77C, 0xA77C, (L::Al, G::Ll)),
    (0xA77D, 0xA77E, (L::Al, G::Lu)),
    (0xA77F, 0xA77F, (L::Al, G::Ll)),
    (0xA780, 0xA780, (L::Al, G::Lu)),
    (0xA781, 0xA781, (L::Al, G::Ll)),
    (0xA782, 0xA782, (L::Al, G::Lu)),
    (0xA783, 0xA783, (L::Al, G::Ll)),
    (0xA784, 0xA784, (L::Al, G::Lu)),
    (0xA785, 0xA785, (L::Al, G::Ll)),
    (0xA786, 0xA786, (L::Al, G::Lu)),
    (0xA787, 0xA787, (L::Al, G::Ll)),
    (0xA788, 0xA788, (L::Al, G::Lm)),
    (0xA789, 0xA78A, (L::Al, G::Sk)),
    (0xA78B, 0xA78B, (L::Al, G::Lu)),
    (0xA78C, 0xA78C, (L::Al, G::Ll)),
    (0xA78D, 0xA78D, (L::Al, G::Lu)),
    (0xA78E, 0xA78E, (L::Al, G::Ll)),
    (0xA78F, 0xA78F, (L::Al, G::Lo)),
    (0xA790, 0xA790, (L::Al, G::Lu)),
    (0xA791, 0xA791, (L::Al, G::Ll)),
    (0xA792, 0xA792, (L::Al, G::Lu)),
    (0xA793, 0xA795, (L::Al, G::Ll)),
    (0xA796, 0xA796, (L::Al, G::Lu)),
    (0xA797, 0xA797, (L::Al, G::Ll)),
    (0xA798, 0xA798, (L::Al, G::Lu)),
    (0xA799, 0xA799, (L::Al, G::Ll)),
    (0xA79A, 0xA79A, (L::Al, G::Lu)),
    (0xA79B, 0xA79B, (L::Al, G::Ll)),
    (0xA79C, 0xA79C, (L::Al, G::Lu)),
    (0xA79D, 0xA79D, (L::Al, G::Ll)),
    (0xA79E, 0xA79E, (L::Al, G::Lu)),
    (0xA79F, 0xA79F, (L::Al, G::Ll)),
    (0xA7A0, 0xA7A0, (L::Al, G::Lu)),
    (0xA7A1, 0xA7A1, (L::Al, G::Ll)),
    (0xA7A2, 0xA7A2, (L::Al, G::Lu)),
    (0xA7A3, 0xA7A3, (L::Al, G::Ll)),
    (0xA7A4, 0xA7A4, (L::Al, G::Lu)),
    (0xA7A5, 0xA7A5, (L::Al, G::Ll)),
    (0xA7A6, 0xA7A6, (L::Al, G::Lu)),
    (0xA7A7, 0xA7A7, (L::Al, G::Ll)),
    (0xA7A8, 0xA7A8, (L::Al, G::Lu)),
    (0xA7A9, 0xA7A9, (L::Al, G::Ll)),
    (0xA7AA, 0xA7AE, (L::Al, G::Lu)),
    (0xA7AF, 0xA7AF, (L::Al, G::Ll)),
    (0xA7B0, 0xA7B4, (L::Al, G::Lu)),
    (0xA7B5, 0xA7B5, (L::Al, G::Ll)),
    (0xA7B6, 0xA7B6, (L::Al, G::Lu)),
    (0xA7B7, 0xA7B7, (L::Al, G::Ll)),
    (0xA7B8, 0xA7B8, (L::Al, G::Lu)),
    (0xA7B9, 0xA7B9, (L::Al, G::Ll)),
    (0xA7BA, 0xA7BA, (L::Al, G::Lu)),
    (0xA7BB, 0xA7BB, (L::Al, G::Ll)),
    (0xA7BC, 0xA7BC, (L::Al, G::Lu)),
    (0xA7BD, 0xA7BD, (L::Al, G::Ll)),
    (0xA7BE, 0xA7BE, (L::Al, G::Lu)),
    (0xA7BF, 0xA7BF, (L::Al, G::Ll)),
    (0xA7C0, 0xA7C0, (L::Al, G::Lu)),
    (0xA7C1, 0xA7C1, (L::Al, G::Ll)),
    (0xA7C2, 0xA7C2, (L::Al, G::Lu)),
    (0xA7C3, 0xA7C3, (L::Al, G::Ll)),
    (0xA7C4, 0xA7C7, (L::Al, G::Lu)),
    (0xA7C8, 0xA7C8, (L::Al, G::Ll)),
    (0xA7C9, 0xA7C9, (L::Al, G::Lu)),
    (0xA7CA, 0xA7CA, (L::Al, G::Ll)),
    (0xA7CB, 0xA7CC, (L::Al, G::Lu)),
    (0xA7CD, 0xA7CD, (L::Al, G::Ll)),
    (0xA7CE, 0xA7CE, (L::Al, G::Lu)),
    (0xA7CF, 0xA7CF, (L::Al, G::Ll)),
    (0xA7D0, 0xA7D0, (L::Al, G::Lu)),
    (0xA7D1, 0xA7D1, (L::Al, G::Ll)),
    (0xA7D2, 0xA7D2, (L::Al, G::Lu)),
    (0xA7D3, 0xA7D3, (L::Al, G::Ll)),
    (0xA7D4, 0xA7D4, (L::Al, G::Lu)),
    (0xA7D5, 0xA7D5, (L::Al, G::Ll)),
    (0xA7D6, 0xA7D6, (L::Al, G::Lu)),
    (0xA7D7, 0xA7D7, (L::Al, G::Ll)),
    (0xA7D8, 0xA7D8, (L::Al, G::Lu)),
    (0xA7D9, 0xA7D9, (L::Al, G::Ll)),
    (0xA7DA, 0xA7DA, (L::Al, G::Lu)),
    (0xA7DB, 0xA7DB, (L::Al, G::Ll)),
    (0xA7DC, 0xA7DC, (L::Al, G::Lu)),
    (0xA7F1, 0xA7F4, (L::Al, G::Lm)),
    (0xA7F5, 0xA7F5, (L::Al, G::Lu)),
    (0xA7F6, 0xA7F6, (L::Al, G::Ll)),
    (0xA7F7, 0xA7F7, (L::Al, G::Lo)),
    (0xA7F8, 0xA7F9, (L::Al, G::Lm)),
    (0xA7FA, 0xA7FA, (L::Al, G::Ll)),
    (0xA7FB, 0xA801, (L::Al, G::Lo)),
    (0xA802, 0xA802, (L::Cm, G::Mn)),
    (0xA803, 0xA805, (L::Al, G::Lo)),
    (0xA806, 0xA806, (L::Cm, G::Mn)),
    (0xA807, 0xA80A, (L::Al, G::Lo)),
    (0xA80B, 0xA80B, (L::Cm, G::Mn)),
    (0xA80C, 0xA822, (L::Al, G::Lo)),
    (0xA823, 0xA824, (L::Cm, G::Mc)),
    (0xA825, 0xA826, (L::Cm, G::Mn)),
    (0xA827, 0xA827, (L::Cm, G::Mc)),
    (0xA828, 0xA82B, (L::Al, G::So)),
    (0xA82C, 0xA82C, (L::Cm, G::Mn)),
    (0xA830, 0xA835, (L::Al, G::No)),
    (0xA836, 0xA837, (L::Al, G::So)),
    (0xA838, 0xA838, (L::Po, G::Sc)),
    (0xA839, 0xA839, (L::Al, G::So)),
    (0xA840, 0xA873, (L::Al, G::Lo)),
    (0xA874, 0xA875, (L::Bb, G::Po)),
    (0xA876, 0xA877, (L::Ex, G::Po)),
    (0xA880, 0xA881, (L::Cm, G::Mc)),
    (0xA882, 0xA8B3, (L::Al, G::Lo)),
    (0xA8B4, 0xA8C3, (L::Cm, G::Mc)),
    (0xA8C4, 0xA8C5, (L::Cm, G::Mn)),
    (0xA8CE, 0xA8CF, (L::Ba, G::Po)),
    (0xA8D0, 0xA8D9, (L::Nu, G::Nd)),
    (0xA8E0, 0xA8F1, (L::Cm, G::Mn)),
    (0xA8F2, 0xA8F7, (L::Al, G::Lo)),
    (0xA8F8, 0xA8FA, (L::Al, G::Po)),
    (0xA8FB, 0xA8FB, (L::Al, G::Lo)),
    (0xA8FC, 0xA8FC, (L::Bb, G::Po)),
    (0xA8FD, 0xA8FE, (L::Al, G::Lo)),
    (0xA8FF, 0xA8FF, (L::Cm, G::Mn)),
    (0xA900, 0xA909, (L::Nu, G::Nd)),
    (0xA90A, 0xA925, (L::Al, G::Lo)),
    (0xA926, 0xA92D, (L::Cm, G::Mn)),
    (0xA92E, 0xA92F, (L::Ba, G::Po)),
    (0xA930, 0xA946, (L::Al, G::Lo)),
    (0xA947, 0xA951, (L::Cm, G::Mn)),
    (0xA952, 0xA953, (L::Cm, G::Mc)),
    (0xA95F, 0xA95F, (L::Al, G::Po)),
    (0xA960, 0xA97C, (L::Jl, G::Lo)),
    (0xA980, 0xA982, (L::Cm, G::Mn)),
    (0xA983, 0xA983, (L::Cm, G::Mc)),
    (0xA984, 0xA9B2, (L::Ak, G::Lo)),
    (0xA9B3, 0xA9B3, (L::Cm, G::Mn)),
    (0xA9B4, 0xA9B5, (L::Cm, G::Mc)),
    (0xA9B6, 0xA9B9, (L::Cm, G::Mn)),
    (0xA9BA, 0xA9BB, (L::Cm, G::Mc)),
    (0xA9BC, 0xA9BD, (L::Cm, G::Mn)),
    (0xA9BE, 0xA9BF, (L::Cm, G::Mc)),
    (0xA9C0, 0xA9C0, (L::Vi, G::Mc)),
    (0xA9C1, 0xA9C6, (L::Id, G::Po)),
    (0xA9C7, 0xA9C9, (L::Ba, G::Po)),
    (0xA9CA, 0xA9CD, (L::Id, G::Po)),
    (0xA9CF, 0xA9CF, (L::Ba, G::Lm)),
    (0xA9D0, 0xA9D9, (L::As, G::Nd)),
    (0xA9DE, 0xA9DF, (L::Id, G::Po)),
    (0xA9E0, 0xA9E4, (L::Sa, G::Lo)),
    (0xA9E5, 0xA9E5, (L::Sa, G::Mn)),
    (0xA9E6, 0xA9E6, (L::Sa, G::Lm)),
    (0xA9E7, 0xA9EF, (L::Sa, G::Lo)),
    (0xA9F0, 0xA9F9, (L::Nu, G::Nd)),
    (0xA9FA, 0xA9FE, (L::Sa, G::Lo)),
    (0xAA00, 0xAA28, (L::As, G::Lo)),
    (0xAA29, 0xAA2E, (L::Cm, G::Mn)),
    (0xAA2F, 0xAA30, (L::Cm, G::Mc)),
    (0xAA31, 0xAA32, (L::Cm, G::Mn)),
    (0xAA33, 0xAA34, (L::Cm, G::Mc)),
    (0xAA35, 0xAA36, (L::Cm, G::Mn)),
    (0xAA40, 0xAA42, (L::Ba, G::Lo)),
    (0xAA43, 0xAA43, (L::Cm, G::Mn)),
    (0xAA44, 0xAA4B, (L::Ba, G::Lo)),
    (0xAA4C, 0xAA4C, (L::Cm, G::Mn)),
    (0xAA4D, 0xAA4D, (L::Cm, G::Mc)),
    (0xAA50, 0xAA59, (L::As, G::Nd)),
    (0xAA5C, 0xAA5C, (L::Id, G::Po)),
    (0xAA5D, 0xAA5F, (L::Ba, G::Po)),
    (0xAA60, 0xAA6F, (L::Sa, G::Lo)),
    (0xAA70, 0xAA70, (L::Sa, G::Lm)),
    (0xAA71, 0xAA76, (L::Sa, G::Lo)),
    (0xAA77, 0xAA79, (L::Sa, G::So)),
    (0xAA7A, 0xAA7A, (L::Sa, G::Lo)),
    (0xAA7B, 0xAA7B, (L::Sa, G::Mc)),
    (0xAA7C, 0xAA7C, (L::Sa, G::Mn)),
    (0xAA7D, 0xAA7D, (L::Sa, G::Mc)),
    (0xAA7E, 0xAAAF, (L::Sa, G::Lo)),
    (0xAAB0, 0xAAB0, (L::Sa, G::Mn)),
    (0xAAB1, 0xAAB1, (L::Sa, G::Lo)),
    (0xAAB2, 0xAAB4, (L::Sa, G::Mn)),
    (0xAAB5, 0xAAB6, (L::Sa, G::Lo)),
    (0xAAB7, 0xAAB8, (L::Sa, G::Mn)),
    (0xAAB9, 0xAABD, (L::Sa, G::Lo)),
    (0xAABE, 0xAABF, (L::Sa, G::Mn)),
    (0xAAC0, 0xAAC0, (L::Sa, G::Lo)),
    (0xAAC1, 0xAAC1, (L::Sa, G::Mn)),
    (0xAAC2, 0xAAC2, (L::Sa, G::Lo)),
    (0xAADB, 0xAADC, (L::Sa, G::Lo)),
    (0xAADD, 0xAADD, (L::Sa, G::Lm)),
    (0xAADE, 0xAADF, (L::Sa, G::Po)),
    (0xAAE0, 0xAAEA, (L::Al, G::Lo)),
    (0xAAEB, 0xAAEB, (L::Cm, G::Mc)),
    (0xAAEC, 0xAAED, (L::Cm, G::Mn)),
    (0xAAEE, 0xAAEF, (L::Cm, G::Mc)),
    (0xAAF0, 0xAAF1, (L::Ba, G::Po)),
    (0xAAF2, 0xAAF2, (L::Al, G::Lo)),
    (0xAAF3, 0xAAF4, (L::Al, G::Lm)),
    (0xAAF5, 0xAAF5, (L::Cm, G::Mc)),
    (0xAAF6, 0xAAF6, (L::Cm, G::Mn)),
    (0xAB01, 0xAB06, (L::Al, G::Lo)),
    (0xAB09, 0xAB0E, (L::Al, G::Lo)),
    (0xAB11, 0xAB16, (L::Al, G::Lo)),
    (0xAB20, 0xAB26, (L::Al, G::Lo)),
    (0xAB28, 0xAB2E, (L::Al, G::Lo)),
    (0xAB30, 0xAB5A, (L::Al, G::Ll)),
    (0xAB5B, 0xAB5B, (L::Al, G::Sk)),
    (0xAB5C, 0xAB5F, (L::Al, G::Lm)),
    (0xAB60, 0xAB68, (L::Al, G::Ll)),
    (0xAB69, 0xAB69, (L::Al, G::Lm)),
    (0xAB6A, 0xAB6B, (L::Al, G::Sk)),
    (0xAB70, 0xABBF, (L::Al, G::Ll)),
    (0xABC0, 0xABE2, (L::Al, G::Lo)),
    (0xABE3, 0xABE4, (L::Cm, G::Mc)),
    (0xABE5, 0xABE5, (L::Cm, G::Mn)),
    (0xABE6, 0xABE7, (L::Cm, G::Mc)),
    (0xABE8, 0xABE8, (L::Cm, G::Mn)),
    (0xABE9, 0xABEA, (L::Cm, G::Mc)),
    (0xABEB, 0xABEB, (L::Ba, G::Po)),
    (0xABEC, 0xABEC, (L::Cm, G::Mc)),
    (0xABED, 0xABED, (L::Cm, G::Mn)),
    (0xABF0, 0xABF9, (L::Nu, G::Nd)),
    (0xAC00, 0xAC00, (L::H2, G::Lo)),
    (0xAC01, 0xAC1B, (L::H3, G::Lo)),
    (0xAC1C, 0xAC1C, (L::H2, G::Lo)),
    (0xAC1D, 0xAC37, (L::H3, G::Lo)),
    (0xAC38, 0xAC38, (L::H2, G::Lo)),
    (0xAC39, 0xAC53, (L::H3, G::Lo)),
    (0xAC54, 0xAC54, (L::H2, G::Lo)),
    (0xAC55, 0xAC6F, (L::H3, G::Lo)),
    (0xAC70, 0xAC70, (L::H2, G::Lo)),
    (0xAC71, 0xAC8B, (L::H3, G::Lo)),
    (0xAC8C, 0xAC8C, (L::H2, G::Lo)),
    (0xAC8D, 0xACA7, (L::H3, G::Lo)),
    (0xACA8, 0xACA8, (L::H2, G::Lo)),
    (0xACA9, 0xACC3, (L::H3, G::Lo)),
    (0xACC4, 0xACC4, (L::H2, G::Lo)),
    (0xACC5, 0xACDF, (L::H3, G::Lo)),
    (0xACE0, 0xACE0, (L::H2, G::Lo)),
    (0xACE1, 0xACFB, (L::H3, G::Lo)),
    (0xACFC, 0xACFC, (L::H2, G::Lo)),
    (0xACFD, 0xAD17, (L::H3, G::Lo)),
    (0xAD18, 0xAD18, (L::H2, G::Lo)),
    (0xAD19, 0xAD33, (L::H3, G::Lo)),
    (0xAD34, 0xAD34, (L::H2, G::Lo)),
    (0xAD35, 0xAD4F, (L::H3, G::Lo)),
    (0xAD50, 0xAD50, (L::H2, G::Lo)),
    (0xAD51, 0xAD6B, (L::H3, G::Lo)),
    (0xAD6C, 0xAD6C, (L::H2, G::Lo)),
    (0xAD6D, 0xAD87, (L::H3, G::Lo)),
    (0xAD88, 0xAD88, (L::H2, G::Lo)),
    (0xAD89, 0xADA3, (L::H3, G::Lo)),
    (0xADA4, 0xADA4, (L::H2, G::Lo)),
    (0xADA5, 0xADBF, (L::H3, G::Lo)),
    (0xADC0, 0xADC0, (L::H2, G::Lo)),
    (0xADC1, 0xADDB, (L::H3, G::Lo)),
    (0xADDC, 0xADDC, (L::H2, G::Lo)),
    (0xADDD, 0xADF7, (L::H3, G::Lo)),
    (0xADF8, 0xADF8, (L::H2, G::Lo)),
    (0xADF9, 0xAE13, (L::H3, G::Lo)),
    (0xAE14, 0xAE14, (L::H2, G::Lo)),
    (0xAE15, 0xAE2F, (L::H3, G::Lo)),
    (0xAE30, 0xAE30, (L::H2, G::Lo)),
    (0xAE31, 0xAE4B, (L::H3, G::Lo)),
    (0xAE4C, 0xAE4C, (L::H2, G::Lo)),
    (0xAE4D, 0xAE67, (L::H3, G::Lo)),
    (0xAE68, 0xAE68, (L::H2, G::Lo)),
    (0xAE69, 0xAE83, (L::H3, G::Lo)),
    (0xAE84, 0xAE84, (L::H2, G::Lo)),
    (0xAE85, 0xAE9F, (L::H3, G::Lo)),
    (0xAEA0, 0xAEA0, (L::H2, G::Lo)),
    (0xAEA1, 0xAEBB, (L::H3, G::Lo)),
    (0xAEBC, 0xAEBC, (L::H2, G::Lo)),
    (0xAEBD, 0xAED7, (L::H3, G::Lo)),
    (0xAED8, 0xAED8, (L::H2, G::Lo)),
    (0xAED9, 0xAEF3, (L::H3, G::Lo)),
    (0xAEF4, 0xAEF4, (L::H2, G::Lo)),
    (0xAEF5, 0xAF0F, (L::H3, G::Lo)),
    (0xAF10, 0xAF10, (L::H2, G::Lo)),
    (0xAF11, 0xAF2B, (L::H3, G::Lo)),
    (0xAF2C, 0xAF2C, (L::H2, G::Lo)),
    (0xAF2D, 0xAF47, (L::H3, G::Lo)),
    (0xAF48, 0xAF48, (L::H2, G::Lo)),
    (0xAF49, 0xAF63, (L::H3, G::Lo)),
    (0xAF64, 0xAF64, (L::H2, G::Lo)),
    (0xAF65, 0xAF7F, (L::H3, G::Lo)),
    (0xAF80, 0xAF80, (L::H2, G::Lo)),
    (0xAF81, 0xAF9B, (L::H3, G::Lo)),
    (0xAF9C, 0xAF9C, (L::H2, G::Lo)),
    (0xAF9D, 0xAFB7, (L::H3, G::Lo)),
    (0xAFB8, 0xAFB8, (L::H2, G::Lo)),
    (0xAFB9, 0xAFD3, (L::H3, G::Lo)),
    (0xAFD4, 0xAFD4, (L::H2, G::Lo)),
    (0xAFD5, 0xAFEF, (L::H3, G::Lo)),
    (0xAFF0, 0xAFF0, (L::H2, G::Lo)),
    (0xAFF1, 0xB00B, (L::H3, G::Lo)),
    (0xB00C, 0xB00C, (L::H2, G::Lo)),
    (0xB00D, 0xB027, (L::H3, G::Lo)),
    (0xB028, 0xB028, (L::H2, G::Lo)),
    (0xB029, 0xB043, (L::H3, G::Lo)),
    (0xB044, 0xB044, (L::H2, G::Lo)),
    (0xB045, 0xB05F, (L::H3, G::Lo)),
    (0xB060, 0xB060, (L::H2, G::Lo)),
    (0xB061, 0xB07B, (L::H3, G::Lo)),
    (0xB07C, 0xB07C, (L::H2, G::Lo)),
    (0xB07D, 0xB097, (L::H3, G::Lo)),
    (0xB098, 0xB098, (L::H2, G::Lo)),
    (0xB099, 0xB0B3, (L::H3, G::Lo)),
    (0xB0B4, 0xB0B4, (L::H2, G::Lo)),
    (0xB0B5, 0xB0CF, (L::H3, G::Lo)),
    (0xB0D0, 0xB0D0, (L::H2, G::Lo)),
    (0xB0D1, 0xB0EB, (L::H3, G::Lo)),
    (0xB0EC, 0xB0EC, (L::H2, G::Lo)),
    (0xB0ED, 0xB107, (L::H3, G::Lo)),
    (0xB108, 0xB108, (L::H2, G::Lo)),
    (0xB109, 0xB123, (L::H3, G::Lo)),
    (0xB124, 0xB124, (L::H2, G::Lo)),
    (0xB125, 0xB13F, (L::H3, G::Lo)),
    (0xB140, 0xB140, (L::H2, G::Lo)),
    (0xB141, 0xB15B, (L::H3, G::Lo)),
    (0xB15C, 0xB15C, (L::H2, G::Lo)),
    (0xB15D, 0xB177, (L::H3, G::Lo)),
    (0xB178, 0xB178, (L::H2, G::Lo)),
    (0xB179, 0xB193, (L::H3, G::Lo)),
    (0xB194, 0xB194, (L::H2, G::Lo)),
    (0xB195, 0xB1AF, (L::H3, G::Lo)),
    (0xB1B0, 0xB1B0, (L::H2, G::Lo)),
    (0xB1B1, 0xB1CB, (L::H3, G::Lo)),
    (0xB1CC, 0xB1CC, (L::H2, G::Lo)),
    (0xB1CD, 0xB1E7, (L::H3, G::Lo)),
    (0xB1E8, 0xB1E8, (L::H2, G::Lo)),
    (0xB1E9, 0xB203, (L::H3, G::Lo)),
    (0xB204, 0xB204, (L::H2, G::Lo)),
    (0xB205, 0xB21F, (L::H3, G::Lo)),
    (0xB220, 0xB220, (L::H2, G::Lo)),
    (0xB221, 0xB23B, (L::H3, G::Lo)),
    (0xB23C, 0xB23C, (L::H2, G::Lo)),
    (0xB23D, 0xB257, (L::H3, G::Lo)),
    (0xB258, 0xB258, (L::H2, G::Lo)),
    (0xB259, 0xB273, (L::H3, G::Lo)),
    (0xB274, 0xB274, (L::H2, G::Lo)),
    (0xB275, 0xB28F, (L::H3, G::Lo)),
    (0xB290, 0xB290, (L::H2, G::Lo)),
    (0xB291, 0xB2AB, (L::H3, G::Lo)),
    (0xB2AC, 0xB2AC, (L::H2, G::Lo)),
    (0xB2AD, 0xB2C7, (L::H3, G::Lo)),
    (0xB2C8, 0xB2C8, (L::H2, G::Lo)),
    (0xB2C9, 0xB2E3, (L::H3, G::Lo)),
    (0xB2E4, 0xB2E4, (L::H2, G::Lo)),
    (0xB2E5, 0xB2FF, (L::H3, G::Lo)),
    (0xB300, 0xB300, (L::H2, G::Lo)),
    (0xB301, 0xB31B, (L::H3, G::Lo)),
    (0xB31C, 0xB31C, (L::H2, G::Lo)),
    (0xB31D, 0xB337, (L::H3, G::Lo)),
    (0xB338, 0xB338, (L::H2, G::Lo)),
    (0xB339, 0xB353, (L::H3, G::Lo)),
    (0xB354, 0xB354, (L::H2, G::Lo)),
    (0xB355, 0xB36F, (L::H3, G::Lo)),
    (0xB370, 0xB370, (L::H2, G::Lo)),
    (0xB371, 0xB38B, (L::H3, G::Lo)),
    (0xB38C, 0xB38C, (L::H2, G::Lo)),
    (0xB38D, 0xB3A7, (L::H3, G::Lo)),
    (0xB3A8, 0xB3A8, (L::H2, G::Lo)),
    (0xB3A9, 0xB3C3, (L::H3, G::Lo)),
    (0xB3C4, 0xB3C4, (L::H2, G::Lo)),
    (0xB3C5, 0xB3DF, (L::H3, G::Lo)),
    (0xB3E0, 0xB3E0, (L::H2, G::Lo)),
    (0xB3E1, 0xB3FB, (L::H3, G::Lo)),
    (0xB3FC, 0xB3FC, (L::H2, G::Lo)),
    (0xB3FD, 0xB417, (L::H3, G::Lo)),
    (0xB418, 0xB418, (L::H2, G::Lo)),
    (0xB419, 0xB433, (L::H3, G::Lo)),
    (0xB434, 0xB434, (L::H2, G::Lo)),
    (0xB435, 0xB44F, (L::H3, G::Lo)),
    (0xB450, 0xB450, (L::H2, G::Lo)),
    (0xB451, 0xB46B, (L::H3, G::Lo)),
    (0xB46C, 0xB46C, (L::H2, G::Lo)),
    (0xB46D, 0xB487, (L::H3, G::Lo)),
    (0xB488, 0xB488, (L::H2, G::Lo)),
    (0xB489, 0xB4A3, (L::H3, G::Lo)),
    (0xB4A4, 0xB4A4, (L::H2, G::Lo)),
    (0xB4A5, 0xB4BF, (L::H3, G::Lo)),
    (0xB4C0, 0xB4C0, (L::H2, G::Lo)),
    (0xB4C1, 0xB4DB, (L::H3, G::Lo)),
    (0xB4DC, 0xB4DC, (L::H2, G::Lo)),
    (0xB4DD, 0xB4F7, (L::H3, G::Lo)),
    (0xB4F8, 0xB4F8, (L::H2, G::Lo)),
    (0xB4F9, 0xB513, (L::H3, G::Lo)),
    (0xB514, 0xB514, (L::H2, G::Lo)),
    (0xB515, 0xB52F, (L::H3, G::Lo)),
    (0xB530, 0xB530, (L::H2, G::Lo)),
    (0xB531, 0xB54B, (L::H3, G::Lo)),
    (0xB54C, 0xB54C, (L::H2, G::Lo)),
    (0xB54D, 0xB567, (L::H3, G::Lo)),
    (0xB568, 0xB568, (L::H2, G::Lo)),
    (0xB569, 0xB583, (L::H3, G::Lo)),
    (0xB584, 0xB584, (L::H2, G::Lo)),
    (0xB585, 0xB59F, (L::H3, G::Lo)),
    (0xB5A0, 0xB5A0, (L::H2, G::Lo)),
    (0xB5A1, 0xB5BB, (L::H3, G::Lo)),
    (0xB5BC, 0xB5BC, (L::H2, G::Lo)),
    (0xB5BD, 0xB5D7, (L::H3, G::Lo)),
    (0xB5D8, 0xB5D8, (L::H2, G::Lo)),
    (0xB5D9, 0xB5F3, (L::H3, G::Lo)),
    (0xB5F4, 0xB5F4, (L::H2, G::Lo)),
    (0xB5F5, 0xB60F, (L::H3, G::Lo)),
    (0xB610, 0xB610, (L::H2, G::Lo)),
    (0xB611, 0xB62B, (L::H3, G::Lo)),
    (0xB62C, 0xB62C, (L::H2, G::Lo)),
    (0xB62D, 0xB647, (L::H3, G::Lo)),
    (0xB648, 0xB648, (L::H2, G::Lo)),
    (0xB649, 0xB663, (L::H3, G::Lo)),
    (0xB664, 0xB664, (L::H2, G::Lo)),
    (0xB665, 0xB67F, (L::H3, G::Lo)),
    (0xB680, 0xB680, (L::H2, G::Lo)),
    (0xB681, 0xB69B, (L::H3, G::Lo)),
    (0xB69C, 0xB69C, (L::H2, G::Lo)),
    (0xB69D, 0xB6B7, (L::H3, G::Lo)),
    (0xB6B8, 0xB6B8, (L::H2, G::Lo)),
    (0xB6B9, 0xB6D3, (L::H3, G::Lo)),
    (0xB6D4, 0xB6D4, (L::H2, G::Lo)),
    (0xB6D5, 0xB6EF, (L::H3, G::Lo)),
    (0xB6F0, 0xB6F0, (L::H2, G::Lo)),
    (0xB6F1, 0xB70B, (L::H3, G::Lo)),
    (0xB70C, 0xB70C, (L::H2, G::Lo)),
    (0xB70D, 0xB727, (L::H3, G::Lo)),
    (0xB728, 0xB728, (L::H2, G::Lo)),
    (0xB729, 0xB743, (L::H3, G::Lo)),
    (0xB744, 0xB744, (L::H2, G::Lo)),
    (0xB745, 0xB75F, (L::H3, G::Lo)),
    (0xB760, 0xB760, (L::H2, G::Lo)),
    (0xB761, 0xB77B, (L::H3, G::Lo)),
    (0xB77C, 0xB77C, (L::H2, G::Lo)),
    (0xB77D, 0xB797, (L::H3, G::Lo)),
    (0xB798, 0xB798, (L::H2, G::Lo)),
    (0xB799, 0xB7B3, (L::H3, G::Lo)),
    (0xB7B4, 0xB7B4, (L::H2, G::Lo)),
    (0xB7B5, 0xB7CF, (L::H3, G::Lo)),
    (0xB7D0, 0xB7D0, (L::H2, G::Lo)),
    (0xB7D1, 0xB7EB, (L::H3, G::Lo)),
    (0xB7EC, 0xB7EC, (L::H2, G::Lo)),
    (0xB7ED, 0xB807, (L::H3, G::Lo)),
    (0xB808, 0xB808, (L::H2, G::Lo)),
    (0xB809, 0xB823, (L::H3, G::Lo)),
    (0xB824, 0xB824, (L::H2, G::Lo)),
    (0xB825, 0xB83F, (L::H3, G::Lo)),
    (0xB840, 0xB840, (L::H2, G::Lo)),
    (0xB841, 0xB85B, (L::H3, G::Lo)),
    (0xB85C, 0xB85C, (L::H2, G::Lo)),
    (0xB85D, 0xB877, (L::H3, G::Lo)),
    (0xB878, 0xB878, (L::H2, G::Lo)),
    (0xB879, 0xB893, (L::H3, G::Lo)),
    (0xB894, 0xB894, (L::H2, G::Lo)),
    (0xB895, 0xB8AF, (L::H3, G::Lo)),
    (0xB8B0, 0xB8B0, (L::H2, G::Lo)),
    (0xB8B1, 0xB8CB, (L::H3, G::Lo)),
    (0xB8CC, 0xB8CC, (L::H2, G::Lo)),
    (0xB8CD, 0xB8E7, (L::H3, G::Lo)),
    (0xB8E8, 0xB8E8, (L::H2, G::Lo)),
    (0xB8E9, 0xB903, (L::H3, G::Lo)),
    (0xB904, 0xB904, (L::H2, G::Lo)),
    (0xB905, 0xB91F, (L::H3, G::Lo)),
    (0xB920, 0xB920, (L::H2, G::Lo)),
    (0xB921, 0xB93B, (L::H3, G::Lo)),
    (0xB93C, 0xB93C, (L::H2, G::Lo)),
    (0xB93D, 0xB957, (L::H3, G::Lo)),
    (0xB958, 0xB958, (L::H2, G::Lo)),
    (0xB959, 0xB973, (L::H3, G::Lo)),
    (0xB974, 0xB974, (L::H2, G::Lo)),
    (0xB975, 0xB98F, (L::H3, G::Lo)),
    (0xB990, 0xB990, (L::H2, G::Lo)),
    (0xB991, 0xB9AB, (L::H3, G::Lo)),
    (0xB9AC, 0xB9AC, (L::H2, G::Lo)),
    (0xB9AD, 0xB9C7, (L::H3, G::Lo)),
    (0xB9C8, 0xB9C8, (L::H2, G::Lo)),
    (0xB9C9, 0xB9E3, (L::H3, G::Lo)),
    (0xB9E4, 0xB9E4, (L::H2, G::Lo)),
    (0xB9E5, 0xB9FF, (L::H3, G::Lo)),
    (0xBA00, 0xBA00, (L::H2, G::Lo)),
    (0xBA01, 0xBA1B, (L::H3, G::Lo)),
    (0xBA1C, 0xBA1C, (L::H2, G::Lo)),
    (0xBA1D, 0xBA37, (L::H3, G::Lo)),
    (0xBA38, 0xBA38, (L::H2, G::Lo)),
    (0xBA39, 0xBA53, (L::H3, G::Lo)),
    (0xBA54, 0xBA54, (L::H2, G::Lo)),
    (0xBA55, 0xBA6F, (L::H3, G::Lo)),
    (0xBA70, 0xBA70, (L::H2, G::Lo)),
    (0xBA71, 0xBA8B, (L::H3, G::Lo)),
    (0xBA8C, 0xBA8C, (L::H2, G::Lo)),
    (0xBA8D, 0xBAA7, (L::H3, G::Lo)),
    (0xBAA8, 0xBAA8, (L::H2, G::Lo)),
    (0xBAA9, 0xBAC3, (L::H3, G::Lo)),
    (0xBAC4, 0xBAC4, (L::H2, G::Lo)),
    (0xBAC5, 0xBADF, (L::H3, G::Lo)),
    (0xBAE0, 0xBAE0, (L::H2, G::Lo)),
    (0xBAE1, 0xBAFB, (L::H3, G::Lo)),
    (0xBAFC, 0xBAFC, (L::H2, G::Lo)),
    (0xBAFD, 0xBB17, (L::H3, G::Lo)),
    (0xBB18, 0xBB18, (L::H2, G::Lo)),
    (0xBB19, 0xBB33, (L::H3, G::Lo)),
    (0xBB34, 0xBB34, (L::H2, G::Lo)),
    (0xBB35, 0xBB4F, (L::H3, G::Lo)),
    (0xBB50, 0xBB50, (L::H2, G::Lo)),
    (0xBB51, 0xBB6B, (L::H3, G::Lo)),
    (0xBB6C, 0xBB6C, (L::H2, G::Lo)),
    (0xBB6D, 0xBB87, (L::H3, G::Lo)),
    (0xBB88, 0xBB88, (L::H2, G::Lo)),
    (0xBB89, 0xBBA3, (L::H3, G::Lo)),
    (0xBBA4, 0xBBA4, (L::H2, G::Lo)),
    (0xBBA5, 0xBBBF, (L::H3, G::Lo)),
    (0xBBC0, 0xBBC0, (L::H2, G::Lo)),
    (0xBBC1, 0xBBDB, (L::H3, G::Lo)),
    (0xBBDC, 0xBBDC, (L::H2, G::Lo)),
    (0xBBDD, 0xBBF7, (L::H3, G::Lo)),
    (0xBBF8, 0xBBF8, (L::H2, G::Lo)),
    (0xBBF9, 0xBC13, (L::H3, G::Lo)),
    (0xBC14, 0xBC14, (L::H2, G::Lo)),
    (0xBC15, 0xBC2F, (L::H3, G::Lo)),
    (0xBC30, 0xBC30, (L::H2, G::Lo)),
    (0xBC31, 0xBC4B, (L::H3, G::Lo)),
    (0xBC4C, 0xBC4C, (L::H2, G::Lo)),
    (0xBC4D, 0xBC67, (L::H3, G::Lo)),
    (0xBC68, 0xBC68, (L::H2, G::Lo)),
    (0xBC69, 0xBC83, (L::H3, G::Lo)),
    (0xBC84, 0xBC84, (L::H2, G::Lo)),
    (0xBC85, 0xBC9F, (L::H3, G::Lo)),
    (0xBCA0, 0xBCA0, (L::H2, G::Lo)),
    (0xBCA1, 0xBCBB, (L::H3, G::Lo)),
    (0xBCBC, 0xBCBC, (L::H2, G::Lo)),
    (0xBCBD, 0xBCD7, (L::H3, G::Lo)),
    (0xBCD8, 0xBCD8, (L::H2, G::Lo)),
    (0xBCD9, 0xBCF3, (L::H3, G::Lo)),
    (0xBCF4, 0xBCF4, (L::H2, G::Lo)),
    (0xBCF5, 0xBD0F, (L::H3, G::Lo)),
    (0xBD10, 0xBD10, (L::H2, G::Lo)),
    (0xBD11, 0xBD2B, (L::H3, G::Lo)),
    (0xBD2C, 0xBD2C, (L::H2, G::Lo)),
    (0xBD2D, 0xBD47, (L::H3, G::Lo)),
    (0xBD48, 0xBD48, (L::H2, G::Lo)),
    (0xBD49, 0xBD63, (L::H3, G::Lo)),
    (0xBD64, 0xBD64, (L::H2, G::Lo)),
    (0xBD65, 0xBD7F, (L::H3, G::Lo)),
    (0xBD80, 0xBD80, (L::H2, G::Lo)),
    (0xBD81, 0xBD9B, (L::H3, G::Lo)),
    (0xBD9C, 0xBD9C, (L::H2, G::Lo)),
    (0xBD9D, 0xBDB7, (L::H3, G::Lo)),
    (0xBDB8, 0xBDB8, (L::H2, G::Lo)),
    (0xBDB9, 0xBDD3, (L::H3, G::Lo)),
    (0xBDD4, 0xBDD4, (L::H2, G::Lo)),
    (0xBDD5, 0xBDEF, (L::H3, G::Lo)),
    (0xBDF0, 0xBDF0, (L::H2, G::Lo)),
    (0xBDF1, 0xBE0B, (L::H3, G::Lo)),
    (0xBE0C, 0xBE0C, (L::H2, G::Lo)),
    (0xBE0D, 0xBE27, (L::H3, G::Lo)),
    (0xBE28, 0xBE28, (L::H2, G::Lo)),
    (0xBE29, 0xBE43, (L::H3, G::Lo)),
    (0xBE44, 0xBE44, (L::H2, G::Lo)),
    (0xBE45, 0xBE5F, (L::H3, G::Lo)),
    (0xBE60, 0xBE60, (L::H2, G::Lo)),
    (0xBE61, 0xBE7B, (L::H3, G::Lo)),
    (0xBE7C, 0xBE7C, (L::H2, G::Lo)),
    (0xBE7D, 0xBE97, (L::H3, G::Lo)),
    (0xBE98, 0xBE98, (L::H2, G::Lo)),
    (0xBE99, 0xBEB3, (L::H3, G::Lo)),
    (0xBEB4, 0xBEB4, (L::H2, G::Lo)),
    (0xBEB5, 0xBECF, (L::H3, G::Lo)),
    (0xBED0, 0xBED0, (L::H2, G::Lo)),
    (0xBED1, 0xBEEB, (L::H3, G::Lo)),
    (0xBEEC, 0xBEEC, (L::H2, G::Lo)),
    (0xBEED, 0xBF07, (L::H3, G::Lo)),
    (0xBF08, 0xBF08, (L::H2, G::Lo)),
    (0xBF09, 0xBF23, (L::H3, G::Lo)),
    (0xBF24, 0xBF24, (L::H2, G::Lo)),
    (0xBF25, 0xBF3F, (L::H3, G::Lo)),
    (0xBF40, 0xBF40, (L::H2, G::Lo)),
    (0xBF41, 0xBF5B, (L::H3, G::Lo)),
    (0xBF5C, 0xBF5C, (L::H2, G::Lo)),
    (0xBF5D, 0xBF77, (L::H3, G::Lo)),
    (0xBF78, 0xBF78, (L::H2, G::Lo)),
    (0xBF79, 0xBF93, (L::H3, G::Lo)),
    (0xBF94, 0xBF94, (L::H2, G::Lo)),
    (0xBF95, 0xBFAF, (L::H3, G::Lo)),
    (0xBFB0, 0xBFB0, (L::H2, G::Lo)),
    (0xBFB1, 0xBFCB, (L::H3, G::Lo)),
    (0xBFCC, 0xBFCC, (L::H2, G::Lo)),
    (0xBFCD, 0xBFE7, (L::H3, G::Lo)),
    (0xBFE8, 0xBFE8, (L::H2, G::Lo)),
    (0xBFE9, 0xC003, (L::H3, G::Lo)),
    (0xC004, 0xC004, (L::H2, G::Lo)),
    (0xC005, 0xC01F, (L::H3, G::Lo)),
    (0xC020, 0xC020, (L::H2, G::Lo)),
    (0xC021, 0xC03B, (L::H3, G::Lo)),
    (0xC03C, 0xC03C, (L::H2, G::Lo)),
    (0xC03D, 0xC057, (L::H3, G::Lo)),
    (0xC058, 0xC058, (L::H2, G::Lo)),
    (0xC059, 0xC073, (L::H3, G::Lo)),
    (0xC074, 0xC074, (L::H2, G::Lo)),
    (0xC075, 0xC08F, (L::H3, G::Lo)),
    (0xC090, 0xC090, (L::H2, G::Lo)),
    (0xC091, 0xC0AB, (L::H3, G::Lo)),
    (0xC0AC, 0xC0AC, (L::H2, G::Lo)),
    (0xC0AD, 0xC0C7, (L::H3, G::Lo)),
    (0xC0C8, 0xC0C8, (L::H2, G::Lo)),
    (0xC0C9, 0xC0E3, (L::H3, G::Lo)),
    (0xC0E4, 0xC0E4, (L::H2, G::Lo)),
    (0xC0E5, 0xC0FF, (L::H3, G::Lo)),
    (0xC100, 0xC100, (L::H2, G::Lo)),
    (0xC101, 0xC11B, (L::H3, G::Lo)),
    (0xC11C, 0xC11C, (L::H2, G::Lo)),
    (0xC11D, 0xC137, (L::H3, G::Lo)),
    (0xC138, 0xC138, (L::H2, G::Lo)),
    (0xC139, 0xC153, (L::H3, G::Lo)),
    (0xC154, 0xC154, (L::H2, G::Lo)),
    (0xC155, 0xC16F, (L::H3, G::Lo)),
    (0xC170, 0xC170, (L::H2, G::Lo)),
    (0xC171, 0xC18B, (L::H3, G::Lo)),
    (0xC18C, 0xC18C, (L::H2, G::Lo)),
    (0xC18D, 0xC1A7, (L::H3, G::Lo)),
    (0xC1A8, 0xC1A8, (L::H2, G::Lo)),
    (0xC1A9, 0xC1C3, (L::H3, G::Lo)),
    (0xC1C4, 0xC1C4, (L::H2, G::Lo)),
    (0xC1C5, 0xC1DF, (L::H3, G::Lo)),
    (0xC1E0, 0xC1E0, (L::H2, G::Lo)),
    (0xC1E1, 0xC1FB, (L::H3, G::Lo)),
    (0xC1FC, 0xC1FC, (L::H2, G::Lo)),
    (0xC1FD, 0xC217, (L::H3, G::Lo)),
    (0xC218, 0xC218, (L::H2, G::Lo)),
    (0xC219, 0xC233, (L::H3, G::Lo)),
    (0xC234, 0xC234, (L::H2, G::Lo)),
    (0xC235, 0xC24F, (L::H3, G::Lo)),
    (0xC250, 0xC250, (L::H2, G::Lo)),
    (0xC251, 0xC26B, (L::H3, G::Lo)),
    (0xC26C, 0xC26C, (L::H2, G::Lo)),
    (0xC26D, 0xC287, (L::H3, G::Lo)),
    (0xC288, 0xC288, (L::H2, G::Lo)),
    (0xC289, 0xC2A3, (L::H3, G::Lo)),
    (0xC2A4, 0xC2A4, (L::H2, G::Lo)),
    (0xC2A5, 0xC2BF, (L::H3, G::Lo)),
    (0xC2C0, 0xC2C0, (L::H2, G::Lo)),
    (0xC2C1, 0xC2DB, (L::H3, G::Lo)),
    (0xC2DC, 0xC2DC, (L::H2, G::Lo)),
    (0xC2DD, 0xC2F7, (L::H3, G::Lo)),
    (0xC2F8, 0xC2F8, (L::H2, G::Lo)),
    (0xC2F9, 0xC313, (L::H3, G::Lo)),
    (0xC314, 0xC314, (L::H2, G::Lo)),
    (0xC315, 0xC32F, (L::H3, G::Lo)),
    (0xC330, 0xC330, (L::H2, G::Lo)),
    (0xC331, 0xC34B, (L::H3, G::Lo)),
    (0xC34C, 0xC34C, (L::H2, G::Lo)),
    (0xC34D, 0xC367, (L::H3, G::Lo)),
    (0xC368, 0xC368, (L::H2, G::Lo)),
    (0xC369, 0xC383, (L::H3, G::Lo)),
    (0xC384, 0xC384, (L::H2, G::Lo)),
    (0xC385, 0xC39F, (L::H3, G::Lo)),
    (0xC3A0, 0xC3A0, (L::H2, G::Lo)),
    (0xC3A1, 0xC3BB, (L::H3, G::Lo)),
    (0xC3BC, 0xC3BC, (L::H2, G::Lo)),
    (0xC3BD, 0xC3D7, (L::H3, G::Lo)),
    (0xC3D8, 0xC3D8, (L::H2, G::Lo)),
    (0xC3D9, 0xC3F3, (L::H3, G::Lo)),
    (0xC3F4, 0xC3F4, (L::H2, G::Lo)),
    (0xC3F5, 0xC40F, (L::H3, G::Lo)),
    (0xC410, 0xC410, (L::H2, G::Lo)),
    (0xC411, 0xC42B, (L::H3, G::Lo)),
    (0xC42C, 0xC42C, (L::H2, G::Lo)),
    (0xC42D, 0xC447, (L::H3, G::Lo)),
    (0xC448, 0xC448, (L::H2, G::Lo)),
    (0xC449, 0xC463, (L::H3, G::Lo)),
    (0xC464, 0xC464, (L::H2, G::Lo)),
    (0xC465, 0xC47F, (L::H3, G::Lo)),
    (0xC480, 0xC480, (L::H2, G::Lo)),
    (0xC481, 0xC49B, (L::H3, G::Lo)),
    (0xC49C, 0xC49C, (L::H2, G::Lo)),
    (0xC49D, 0xC4B7, (L::H3, G::Lo)),
    (0xC4B8, 0xC4B8, (L::H2, G::Lo)),
    (0xC4B9, 0xC4D3, (L::H3, G::Lo)),
    (0xC4D4, 0xC4D4, (L::H2, G::Lo)),
    (0xC4D5, 0xC4EF, (L::H3, G::Lo)),
    (0xC4F0, 0xC4F0, (L::H2, G::Lo)),
    (0xC4F1, 0xC50B, (L::H3, G::Lo)),
    (0xC50C, 0xC50C, (L::H2, G::Lo)),
    (0xC50D, 0xC527, (L::H3, G::Lo)),
    (0xC528, 0xC528, (L::H2, G::Lo)),
    (0xC529, 0xC543, (L::H3, G::Lo)),
    (0xC544, 0xC544, (L::H2, G::Lo)),
    (0xC545, 0xC55F, (L::H3, G::Lo)),
    (0xC560, 0xC560, (L::H2, G::Lo)),
    (0xC561, 0xC57B, (L::H3, G::Lo)),
    (0xC57C, 0xC57C, (L::H2, G::Lo)),
    (0xC57D, 0xC597, (L::H3, G::Lo)),
    (0xC598, 0xC598, (L::H2, G::Lo)),
    (0xC599, 0xC5B3, (L::H3, G::Lo)),
    (0xC5B4, 0xC5B4, (L::H2, G::Lo)),
    (0xC5B5, 0xC5CF, (L::H3, G::Lo)),
    (0xC5D0, 0xC5D0, (L::H2, G::Lo)),
    (0xC5D1, 0xC5EB, (L::H3, G::Lo)),
    (0xC5EC, 0xC5EC, (L::H2, G::Lo)),
    (0xC5ED, 0xC607, (L::H3, G::Lo)),
    (0xC608, 0xC608, (L::H2, G::Lo)),
    (0xC609, 0xC623, (L::H3, G::Lo)),
    (0xC624, 0xC624, (L::H2, G::Lo)),
    (0xC625, 0xC63F, (L::H3, G::Lo)),
    (0xC640, 0xC640, (L::H2, G::Lo)),
    (0xC641, 0xC65B, (L::H3, G::Lo)),
    (0xC65C, 0xC65C, (L::H2, G::Lo)),
    (0xC65D, 0xC677, (L::H3, G::Lo)),
    (0xC678, 0xC678, (L::H2, G::Lo)),
    (0xC679, 0xC693, (L::H3, G::Lo)),
    (0xC694, 0xC694, (L::H2, G::Lo)),
    (0xC695, 0xC6AF, (L::H3, G::Lo)),
    (0xC6B0, 0xC6B0, (L::H2, G::Lo)),
    (0xC6B1, 0xC6CB, (L::H3, G::Lo)),
    (0xC6CC, 0xC6CC, (L::H2, G::Lo)),
    (0xC6CD, 0xC6E7, (L::H3, G::Lo)),
    (0xC6E8, 0xC6E8, (L::H2, G::Lo)),
    (0xC6E9, 0xC703, (L::H3, G::Lo)),
    (0xC704, 0xC704, (L::H2, G::Lo)),
    (0xC705, 0xC71F, (L::H3, G::Lo)),
    (0xC720, 0xC720, (L::H2, G::Lo)),
    (0xC721, 0xC73B, (L::H3, G::Lo)),
    (0xC73C, 0xC73C, (L::H2, G::Lo)),
    (0xC73D, 0xC757, (L::H3, G::Lo)),
    (0xC758, 0xC758, (L::H2, G::Lo)),
    (0xC759, 0xC773, (L::H3, G::Lo)),
    (0xC774, 0xC774, (L::H2, G::Lo)),
    (0xC775, 0xC78F, (L::H3, G::Lo)),
    (0xC790, 0xC790, (L::H2, G::Lo)),
    (0xC791, 0xC7AB, (L::H3, G::Lo)),
    (0xC7AC, 0xC7AC, (L::H2, G::Lo)),
    (0xC7AD, 0xC7C7, (L::H3, G::Lo)),
    (0xC7C8, 0xC7C8, (L::H2, G::Lo)),
    (0xC7C9, 0xC7E3, (L::H3, G::Lo)),
    (0xC7E4, 0xC7E4, (L::H2, G::Lo)),
    (0xC7E5, 0xC7FF, (L::H3, G::Lo)),
    (0xC800, 0xC800, (L::H2, G::Lo)),
    (0xC801, 0xC81B, (L::H3, G::Lo)),
    (0xC81C, 0xC81C, (L::H2, G::Lo)),
    (0xC81D, 0xC837, (L::H3, G::Lo)),
    (0xC838, 0xC838, (L::H2, G::Lo)),
    (0xC839, 0xC853, (L::H3, G::Lo)),
    (0xC854, 0xC854, (L::H2, G::Lo)),
    (0xC855, 0xC86F, (L::H3, G::Lo)),
    (0xC870, 0xC870, (L::H2, G::Lo)),
    (0xC871, 0xC88B, (L::H3, G::Lo)),
    (0xC88C, 0xC88C, (L::H2, G::Lo)),
    (0xC88D, 0xC8A7, (L::H3, G::Lo)),
    (0xC8A8, 0xC8A8, (L::H2, G::Lo)),
    (0xC8A9, 0xC8C3, (L::H3, G::Lo)),
    (0xC8C4, 0xC8C4, (L::H2, G::Lo)),
    (0xC8C5, 0xC8DF, (L::H3, G::Lo)),
    (0xC8E0, 0xC8E0, (L::H2, G::Lo)),
    (0xC8E1, 0xC8FB, (L::H3, G::Lo)),
    (0xC8FC, 0xC8FC, (L::H2, G::Lo)),
    (0xC8FD, 0xC917, (L::H3, G::Lo)),
    (0xC918, 0xC918, (L::H2, G::Lo)),
    (0xC919, 0xC933, (L::H3, G::Lo)),
    (0xC934, 0xC934, (L::H2, G::Lo)),
    (0xC935, 0xC94F, (L::H3, G::Lo)),
    (0xC950, 0xC950, (L::H2, G::Lo)),
    (0xC951, 0xC96B, (L::H3, G::Lo)),
    (0xC96C, 0xC96C, (L::H2, G::Lo)),
    (0xC96D, 0xC987, (L::H3, G::Lo)),
    (0xC988, 0xC988, (L::H2, G::Lo)),
    (0xC989, 0xC9A3, (L::H3, G::Lo)),
    (0xC9A4, 0xC9A4, (L::H2, G::Lo)),
    (0xC9A5, 0xC9BF, (L::H3, G::Lo)),
    (0xC9C0, 0xC9C0, (L::H2, G::Lo)),
    (0xC9C1, 0xC9DB, (L::H3, G::Lo)),
    (0xC9DC, 0xC9DC, (L::H2, G::Lo)),
    (0xC9DD, 0xC9F7, (L::H3, G::Lo)),
    (0xC9F8, 0xC9F8, (L::H2, G::Lo)),
    (0xC9F9, 0xCA13, (L::H3, G::Lo)),
    (0xCA14, 0xCA14, (L::H2, G::Lo)),
    (0xCA15, 0xCA2F, (L::H3, G::Lo)),
    (0xCA30, 0xCA30, (L::H2, G::Lo)),
    (0xCA31, 0xCA4B, (L::H3, G::Lo)),
    (0xCA4C, 0xCA4C, (L::H2, G::Lo)),
    (0xCA4D, 0xCA67, (L::H3, G::Lo)),
    (0xCA68, 0xCA68, (L::H2, G::Lo)),
    (0xCA69, 0xCA83, (L::H3, G::Lo)),
    (0xCA84, 0xCA84, (L::H2, G::Lo)),
    (0xCA85, 0xCA9F, (L::H3, G::Lo)),
    (0xCAA0, 0xCAA0, (L::H2, G::Lo)),
    (0xCAA1, 0xCABB, (L::H3, G::Lo)),
    (0xCABC, 0xCABC, (L::H2, G::Lo)),
    (0xCABD, 0xCAD7, (L::H3, G::Lo)),
    (0xCAD8, 0xCAD8, (L::H2, G::Lo)),
    (0xCAD9, 0xCAF3, (L::H3, G::Lo)),
    (0xCAF4, 0xCAF4, (L::H2, G::Lo)),
    (0xCAF5, 0xCB0F, (L::H3, G::Lo)),
    (0xCB10, 0xCB10, (L::H2, G::Lo)),
    (0xCB11, 0xCB2B, (L::H3, G::Lo)),
    (0xCB2C, 0xCB2C, (L::H2, G::Lo)),
    (0xCB2D, 0xCB47, (L::H3, G::Lo)),
    (0xCB48, 0xCB48, (L::H2, G::Lo)),
    (0xCB49, 0xCB63, (L::H3, G::Lo)),
    (0xCB64, 0xCB64, (L::H2, G::Lo)),
    (0xCB65, 0xCB7F, (L::H3, G::Lo)),
    (0xCB80, 0xCB80, (L::H2, G::Lo)),
    (0xCB81, 0xCB9B, (L::H3, G::Lo)),
    (0xCB9C, 0xCB9C, (L::H2, G::Lo)),
    (0xCB9D, 0xCBB7, (L::H3, G::Lo)),
    (0xCBB8, 0xCBB8, (L::H2, G::Lo)),
    (0xCBB9, 0xCBD3, (L::H3, G::Lo)),
    (0xCBD4, 0xCBD4, (L::H2, G::Lo)),
    (0xCBD5, 0xCBEF, (L::H3, G::Lo)),
    (0xCBF0, 0xCBF0, (L::H2, G::Lo)),
    (0xCBF1, 0xCC0B, (L::H3, G::Lo)),
    (0xCC0C, 0xCC0C, (L::H2, G::Lo)),
    (0xCC0D, 0xCC27, (L::H3, G::Lo)),
    (0xCC28, 0xCC28, (L::H2, G::Lo)),
    (0xCC29, 0xCC43, (L::H3, G::Lo)),
    (0xCC44, 0xCC44, (L::H2, G::Lo)),
    (0xCC45, 0xCC5F, (L::H3, G::Lo)),
    (0xCC60, 0xCC60, (L::H2, G::Lo)),
    (0xCC61, 0xCC7B, (L::H3, G::Lo)),
    (0xCC7C, 0xCC7C, (L::H2, G::Lo)),
    (0xCC7D, 0xCC97, (L::H3, G::Lo)),
    (0xCC98, 0xCC98, (L::H2, G::Lo)),
    (0xCC99, 0xCCB3, (L::H3, G::Lo)),
    (0xCCB4, 0xCCB4, (L::H2, G::Lo)),
    (0xCCB5, 0xCCCF, (L::H3, G::Lo)),
    (0xCCD0, 0xCCD0, (L::H2, G::Lo)),
    (0xCCD1, 0xCCEB, (L::H3, G::Lo)),
    (0xCCEC, 0xCCEC, (L::H2, G::Lo)),
    (0xCCED, 0xCD07, (L::H3, G::Lo)),
    (0xCD08, 0xCD08, (L::H2, G::Lo)),
    (0xCD09, 0xCD23, (L::H3, G::Lo)),
    (0xCD24, 0xCD24, (L::H2, G::Lo)),
    (0xCD25, 0xCD3F, (L::H3, G::Lo)),
    (0xCD40, 0xCD40, (L::H2, G::Lo)),
    (0xCD41, 0xCD5B, (L::H3, G::Lo)),
    (0xCD5C, 0xCD5C, (L::H2, G::Lo)),
    (0xCD5D, 0xCD77, (L::H3, G::Lo)),
    (0xCD78, 0xCD78, (L::H2, G::Lo)),
    (0xCD79, 0xCD93, (L::H3, G::Lo)),
    (0xCD94, 0xCD94, (L::H2, G::Lo)),
    (0xCD95, 0xCDAF, (L::H3, G::Lo)),
    (0xCDB0, 0xCDB0, (L::H2, G::Lo)),
    (0xCDB1, 0xCDCB, (L::H3, G::Lo)),
    (0xCDCC, 0xCDCC, (L::H2, G::Lo)),
    (0xCDCD, 0xCDE7, (L::H3, G::Lo)),
    (0xCDE8, 0xCDE8, (L::H2, G::Lo)),
    (0xCDE9, 0xCE03, (L::H3, G::Lo)),
    (0xCE04, 0xCE04, (L::H2, G::Lo)),
    (0xCE05, 0xCE1F, (L::H3, G::Lo)),
    (0xCE20, 0xCE20, (L::H2, G::Lo)),
    (0xCE21, 0xCE3B, (L::H3, G::Lo)),
    (0xCE3C, 0xCE3C, (L::H2, G::Lo)),
    (0xCE3D, 0xCE57, (L::H3, G::Lo)),
    (0xCE58, 0xCE58, (L::H2, G::Lo)),
    (0xCE59, 0xCE73, (L::H3, G::Lo)),
    (0xCE74, 0xCE74, (L::H2, G::Lo)),
    (0xCE75, 0xCE8F, (L::H3, G::Lo)),
    (0xCE90, 0xCE90, (L::H2, G::Lo)),
    (0xCE91, 0xCEAB, (L::H3, G::Lo)),
    (0xCEAC, 0xCEAC, (L::H2, G::Lo)),
    (0xCEAD, 0xCEC7, (L::H3, G::Lo)),
    (0xCEC8, 0xCEC8, (L::H2, G::Lo)),
    (0xCEC9, 0xCEE3, (L::H3, G::Lo)),
    (0xCEE4, 0xCEE4, (L::H2, G::Lo)),
    (0xCEE5, 0xCEFF, (L::H3, G::Lo)),
    (0xCF00, 0xCF00, (L::H2, G::Lo)),
    (0xCF01, 0xCF1B, (L::H3, G::Lo)),
    (0xCF1C, 0xCF1C, (L::H2, G::Lo)),
    (0xCF1D, 0xCF37, (L::H3, G::Lo)),
    (0xCF38, 0xCF38, (L::H2, G::Lo)),
    (0xCF39, 0xCF53, (L::H3, G::Lo)),
    (0xCF54, 0xCF54, (L::H2, G::Lo)),
    (0xCF55, 0xCF6F, (L::H3, G::Lo)),
    (0xCF70, 0xCF70, (L::H2, G::Lo)),
    (0xCF71, 0xCF8B, (L::H3, G::Lo)),
    (0xCF8C, 0xCF8C, (L::H2, G::Lo)),
    (0xCF8D, 0xCFA7, (L::H3, G::Lo)),
    (0xCFA8, 0xCFA8, (L::H2, G::Lo)),
    (0xCFA9, 0xCFC3, (L::H3, G::Lo)),
    (0xCFC4, 0xCFC4, (L::H2, G::Lo)),
    (0xCFC5, 0xCFDF, (L::H3, G::Lo)),
    (0xCFE0, 0xCFE0, (L::H2, G::Lo)),
    (0xCFE1, 0xCFFB, (L::H3, G::Lo)),
    (0xCFFC, 0xCFFC, (L::H2, G::Lo)),
    (0xCFFD, 0xD017, (L::H3, G::Lo)),
    (0xD018, 0xD018, (L::H2, G::Lo)),
    (0xD019, 0xD033, (L::H3, G::Lo)),
    (0xD034, 0xD034, (L::H2, G::Lo)),
    (0xD035, 0xD04F, (L::H3, G::Lo)),
    (0xD050, 0xD050, (L::H2, G::Lo)),
    (0xD051, 0xD06B, (L::H3, G::Lo)),
    (0xD06C, 0xD06C, (L::H2, G::Lo)),
    (0xD06D, 0xD087, (L::H3, G::Lo)),
    (0xD088, 0xD088, (L::H2, G::Lo)),
    (0xD089, 0xD0A3, (L::H3, G::Lo)),
    (0xD0A4, 0xD0A4, (L::H2, G::Lo)),
    (0xD0A5, 0xD0BF, (L::H3, G::Lo)),
    (0xD0C0, 0xD0C0, (L::H2, G::Lo)),
    (0xD0C1, 0xD0DB, (L::H3, G::Lo)),
    (0xD0DC, 0xD0DC, (L::H2, G::Lo)),
    (0xD0DD, 0xD0F7, (L::H3, G::Lo)),
    (0xD0F8, 0xD0F8, (L::H2, G::Lo)),
    (0xD0F9, 0xD113, (L::H3, G::Lo)),
    (0xD114, 0xD114, (L::H2, G::Lo)),
    (0xD115, 0xD12F, (L::H3, G::Lo)),
    (0xD130, 0xD130, (L::H2, G::Lo)),
    (0xD131, 0xD14B, (L::H3, G::Lo)),
    (0xD14C, 0xD14C, (L::H2, G::Lo)),
    (0xD14D, 0xD167, (L::H3, G::Lo)),
    (0xD168, 0xD168, (L::H2, G::Lo)),
    (0xD169, 0xD183, (L::H3, G::Lo)),
    (0xD184, 0xD184, (L::H2, G::Lo)),
    (0xD185, 0xD19F, (L::H3, G::Lo)),
    (0xD1A0, 0xD1A0, (L::H2, G::Lo)),
    (0xD1A1, 0xD1BB, (L::H3, G::Lo)),
    (0xD1BC, 0xD1BC, (L::H2, G::Lo)),
    (0xD1BD, 0xD1D7, (L::H3, G::Lo)),
    (0xD1D8, 0xD1D8, (L::H2, G::Lo)),
    (0xD1D9, 0xD1F3, (L::H3, G::Lo)),
    (0xD1F4, 0xD1F4, (L::H2, G::Lo)),
    (0xD1F5, 0xD20F, (L::H3, G::Lo)),
    (0xD210, 0xD210, (L::H2, G::Lo)),
    (0xD211, 0xD22B, (L::H3, G::Lo)),
    (0xD22C, 0xD22C, (L::H2, G::Lo)),
    (0xD22D, 0xD247, (L::H3, G::Lo)),
    (0xD248, 0xD248, (L::H2, G::Lo)),
    (0xD249, 0xD263, (L::H3, G::Lo)),
    (0xD264, 0xD264, (L::H2, G::Lo)),
    (0xD265, 0xD27F, (L::H3, G::Lo)),
    (0xD280, 0xD280, (L::H2, G::Lo)),
    (0xD281, 0xD29B, (L::H3, G::Lo)),
    (0xD29C, 0xD29C, (L::H2, G::Lo)),
    (0xD29D, 0xD2B7, (L::H3, G::Lo)),
    (0xD2B8, 0xD2B8, (L::H2, G::Lo)),
    (0xD2B9, 0xD2D3, (L::H3, G::Lo)),
    (0xD2D4, 0xD2D4, (L::H2, G::Lo)),
    (0xD2D5, 0xD2EF, (L::H3, G::Lo)),
    (0xD2F0, 0xD2F0, (L::H2, G::Lo)),
    (0xD2F1, 0xD30B, (L::H3, G::Lo)),
    (0xD30C, 0xD30C, (L::H2, G::Lo)),
    (0xD30D, 0xD327, (L::H3, G::Lo)),
    (0xD328, 0xD328, (L::H2, G::Lo)),
    (0xD329, 0xD343, (L::H3, G::Lo)),
    (0xD344, 0xD344, (L::H2, G::Lo)),
    (0xD345, 0xD35F, (L::H3, G::Lo)),
    (0xD360, 0xD360, (L::H2, G::Lo)),
    (0xD361, 0xD37B, (L::H3, G::Lo)),
    (0xD37C, 0xD37C, (L::H2, G::Lo)),
    (0xD37D, 0xD397, (L::H3, G::Lo)),
    (0xD398, 0xD398, (L::H2, G::Lo)),
    (0xD399, 0xD3B3, (L::H3, G::Lo)),
    (0xD3B4, 0xD3B4, (L::H2, G::Lo)),
    (0xD3B5, 0xD3CF, (L::H3, G::Lo)),
    (0xD3D0, 0xD3D0, (L::H2, G::Lo)),
    (0xD3D1, 0xD3EB, (L::H3, G::Lo)),
    (0xD3EC, 0xD3EC, (L::H2, G::Lo)),
    (0xD3ED, 0xD407, (L::H3, G::Lo)),
    (0xD408, 0xD408, (L::H2, G::Lo)),
    (0xD409, 0xD423, (L::H3, G::Lo)),
    (0xD424, 0xD424, (L::H2, G::Lo)),
    (0xD425, 0xD43F, (L::H3, G::Lo)),
    (0xD440, 0xD440, (L::H2, G::Lo)),
    (0xD441, 0xD45B, (L::H3, G::Lo)),
    (0xD45C, 0xD45C, (L::H2, G::Lo)),
    (0xD45D, 0xD477, (L::H3, G::Lo)),
    (0xD478, 0xD478, (L::H2, G::Lo)),
    (0xD479, 0xD493, (L::H3, G::Lo)),
    (0xD494, 0xD494, (L::H2, G::Lo)),
    (0xD495, 0xD4AF, (L::H3, G::Lo)),
    (0xD4B0, 0xD4B0, (L::H2, G::Lo)),
    (0xD4B1, 0xD4CB, (L::H3, G::Lo)),
    (0xD4CC, 0xD4CC, (L::H2, G::Lo)),
    (0xD4CD, 0xD4E7, (L::H3, G::Lo)),
    (0xD4E8, 0xD4E8, (L::H2, G::Lo)),
    (0xD4E9, 0xD503, (L::H3, G::Lo)),
    (0xD504, 0xD504, (L::H2, G::Lo)),
    (0xD505, 0xD51F, (L::H3, G::Lo)),
    (0xD520, 0xD520, (L::H2, G::Lo)),
    (0xD521, 0xD53B, (L::H3, G::Lo)),
    (0xD53C, 0xD53C, (L::H2, G::Lo)),
    (0xD53D, 0xD557, (L::H3, G::Lo)),
    (0xD558, 0xD558, (L::H2, G::Lo)),
    (0xD559, 0xD573, (L::H3, G::Lo)),
    (0xD574, 0xD574, (L::H2, G::Lo)),
    (0xD575, 0xD58F, (L::H3, G::Lo)),
    (0xD590, 0xD590, (L::H2, G::Lo)),
    (0xD591, 0xD5AB, (L::H3, G::Lo)),
    (0xD5AC, 0xD5AC, (L::H2, G::Lo)),
    (0xD5AD, 0xD5C7, (L::H3, G::Lo)),
    (0xD5C8, 0xD5C8, (L::H2, G::Lo)),
    (0xD5C9, 0xD5E3, (L::H3, G::Lo)),
    (0xD5E4, 0xD5E4, (L::H2, G::Lo)),
    (0xD5E5, 0xD5FF, (L::H3, G::Lo)),
    (0xD600, 0xD600, (L::H2, G::Lo)),
    (0xD601, 0xD61B, (L::H3, G::Lo)),
    (0xD61C, 0xD61C, (L::H2, G::Lo)),
    (0xD61D, 0xD637, (L::H3, G::Lo)),
    (0xD638, 0xD638, (L::H2, G::Lo)),
    (0xD639, 0xD653, (L::H3, G::Lo)),
    (0xD654, 0xD654, (L::H2, G::Lo)),
    (0xD655, 0xD66F, (L::H3, G::Lo)),
    (0xD670, 0xD670, (L::H2, G::Lo)),
    (0xD671, 0xD68B, (L::H3, G::Lo)),
    (0xD68C, 0xD68C, (L::H2, G::Lo)),
    (0xD68D, 0xD6A7, (L::H3, G::Lo)),
    (0xD6A8, 0xD6A8, (L::H2, G::Lo)),
    (0xD6A9, 0xD6C3, (L::H3, G::Lo)),
    (0xD6C4, 0xD6C4, (L::H2, G::Lo)),
    (0xD6C5, 0xD6DF, (L::H3, G::Lo)),
    (0xD6E0, 0xD6E0, (L::H2, G::Lo)),
    (0xD6E1, 0xD6FB, (L::H3, G::Lo)),
    (0xD6FC, 0xD6FC, (L::H2, G::Lo)),
    (0xD6FD, 0xD717, (L::H3, G::Lo)),
    (0xD718, 0xD718, (L::H2, G::Lo)),
    (0xD719, 0xD733, (L::H3, G::Lo)),
    (0xD734, 0xD734, (L::H2, G::Lo)),
    (0xD735, 0xD74F, (L::H3, G::Lo)),
    (0xD750, 0xD750, (L::H2, G::Lo)),
    (0xD751, 0xD76B, (L::H3, G::Lo)),
    (0xD76C, 0xD76C, (L::H2, G::Lo)),
    (0xD76D, 0xD787, (L::H3, G::Lo)),
    (0xD788, 0xD788, (L::H2, G::Lo)),
    (0xD789, 0xD7A3, (L::H3, G::Lo)),
    (0xD7B0, 0xD7C6, (L::Jv, G::Lo)),
    (0xD7CB, 0xD7FB, (L::Jt, G::Lo)),
    (0xF900, 0xFA6D, (L::Id, G::Lo)),
    (0xFA6E, 0xFA6F, (L::Id, G::Cn)),
    (0xFA70, 0xFAD9, (L::Id, G::Lo)),
    (0xFADA, 0xFAFF, (L::Id, G::Cn)),
    (0xFB00, 0xFB06, (L::Al, G::Ll)),
    (0xFB13, 0xFB17, (L::Al, G::Ll)),
    (0xFB1D, 0xFB1D, (L::Hl, G::Lo)),
    (0xFB1E, 0xFB1E, (L::Cm, G::Mn)),
    (0xFB1F, 0xFB28, (L::Hl, G::Lo)),
    (0xFB29, 0xFB29, (L::Al, G::Sm)),
    (0xFB2A, 0xFB36, (L::Hl, G::Lo)),
    (0xFB38, 0xFB3C, (L::Hl, G::Lo)),
    (0xFB3E, 0xFB3E, (L::Hl, G::Lo)),
    (0xFB40, 0xFB41, (L::Hl, G::Lo)),
    (0xFB43, 0xFB44, (L::Hl, G::Lo)),
    (0xFB46, 0xFB4F, (L::Hl, G::Lo)),
    (0xFB50, 0xFBB1, (L::Al, G::Lo)),
    (0xFBB2, 0xFBC2, (L::Al, G::Sk)),
    (0xFBC3, 0xFBD2, (L::Al, G::So)),
    (0xFBD3, 0xFD3D, (L::Al, G::Lo)),
    (0xFD3E, 0xFD3E, (L::Cl, G::Pe)),
    (0xFD3F, 0xFD3F, (L::Op, G::Ps)),
    (0xFD40, 0xFD4F, (L::Al, G::So)),
    (0xFD50, 0xFD8F, (L::Al, G::Lo)),
    (0xFD90, 0xFD91, (L::Al, G::So)),
    (0xFD92, 0xFDC7, (L::Al, G::Lo)),
    (0xFDC8, 0xFDCF, (L::Al, G::So)),
    (0xFDF0, 0xFDFB, (L::Al, G::Lo)),
    (0xFDFC, 0xFDFC, (L::Po, G::Sc)),
    (0xFDFD, 0xFDFF, (L::Al, G::So)),
    (0xFE00, 0xFE0F, (L::Cm, G::Mn)),
    (0xFE10, 0xFE12, (L::Cl, G::Po)),
    (0xFE13, 0xFE14, (L::Ns, G::Po)),
    (0xFE15, 0xFE16, (L::Ex, G::Po)),
    (0xFE17, 0xFE17, (L::Op, G::Ps)),
    (0xFE18, 0xFE18, (L::Cl, G::Pe)),
    (0xFE19, 0xFE19, (L::In, G::Po)),
    (0xFE20, 0xFE20, (L::Gl, G::Mn)),
    (0xFE21, 0xFE21, (L::Cm, G::Mn)),
    (0xFE22, 0xFE22, (L::Gl, G::Mn)),
    (0xFE23, 0xFE23, (L::Cm, G::Mn)),
    (0xFE24, 0xFE24, (L::Gl, G::Mn)),
    (0xFE25, 0xFE25, (L::Cm, G::Mn)),
    (0xFE26, 0xFE27, (L::Gl, G::Mn)),
    (0xFE28, 0xFE28, (L::Cm, G::Mn)),
    (0xFE29, 0xFE29, (L::Gl, G::Mn)),
    (0xFE2A, 0xFE2A, (L::Cm, G::Mn)),
    (0xFE2B, 0xFE2B, (L::Gl, G::Mn)),
    (0xFE2C, 0xFE2C, (L::Cm, G::Mn)),
    (0xFE2D, 0xFE2E, (L::Gl, G::Mn)),
    (0xFE2F, 0xFE2F, (L::Cm, G::Mn)),
    (0xFE30, 0xFE30, (L::Id, G::Po)),
    (0xFE31, 0xFE32, (L::Id, G::Pd)),
    (0xFE33, 0xFE34, (L::Id, G::Pc)),
    (0xFE35, 0xFE35, (L::Op, G::Ps)),
    (0xFE36, 0xFE36, (L::Cl, G::Pe)),
    (0xFE37, 0xFE37, (L::Op, G::Ps)),
    (0xFE38, 0xFE38, (L::Cl, G::Pe)),
    (0xFE39, 0xFE39, (L::Op, G::Ps)),
    (0xFE3A, 0xFE3A, (L::Cl, G::Pe)),
    (0xFE3B, 0xFE3B, (L::Op, G::Ps)),
    (0xFE3C, 0xFE3C, (L::Cl, G::Pe)),
    (0xFE3D, 0xFE3D, (L::Op, G::Ps)),
    (0xFE3E, 0xFE3E, (L::Cl, G::Pe)),
    (0xFE3F, 0xFE3F, (L::Op, G::Ps)),
    (0xFE40, 0xFE40, (L::Cl, G::Pe)),
    (0xFE41, 0xFE41, (L::Op, G::Ps)),
    (0xFE42, 0xFE42, (L::Cl, G::Pe)),
    (0xFE43, 0xFE43, (L::Op, G::Ps)),
    (0xFE44, 0xFE44, (L::Cl, G::Pe)),
    (0xFE45, 0xFE46, (L::Id, G::Po)),
    (0xFE47, 0xFE47, (L::Op, G::Ps)),
    (0xFE48, 0xFE48, (L::Cl, G::Pe)),
    (0xFE49, 0xFE4C, (L::Id, G::Po)),
    (0xFE4D, 0xFE4F, (L::Id, G::Pc)),
    (0xFE50, 0xFE50, (L::Cl, G::Po)),
    (0xFE51, 0xFE51, (L::Id, G::Po)),
    (0xFE52, 0xFE52, (L::Cl, G::Po)),
    (0xFE54, 0xFE55, (L::Ns, G::Po)),
    (0xFE56, 0xFE57, (L::Ex, G::Po)),
    (0xFE58, 0xFE58, (L::Id, G::Pd)),
    (0xFE59, 0xFE59, (L::Op, G::Ps)),
    (0xFE5A, 0xFE5A, (L::Cl, G::Pe)),
    (0xFE5B, 0xFE5B, (L::Op, G::Ps)),
    (0xFE5C, 0xFE5C, (L::Cl, G::Pe)),
    (0xFE5D, 0xFE5D, (L::Op, G::Ps)),
    (0xFE5E, 0xFE5E, (L::Cl, G::Pe)),
    (0xFE5F, 0xFE61, (L::Id, G::Po)),
    (0xFE62, 0xFE62, (L::Id, G::Sm)),
    (0xFE63, 0xFE63, (L::Id, G::Pd)),
    (0xFE64, 0xFE66, (L::Id, G::Sm)),
    (0xFE68, 0xFE68, (L::Id, G::Po)),
    (0xFE69, 0xFE69, (L::Pr, G::Sc)),
    (0xFE6A, 0xFE6A, (L::Po, G::Po)),
    (0xFE6B, 0xFE6B, (L::Id, G::Po)),
    (0xFE70, 0xFE74, (L::Al, G::Lo)),
    (0xFE76, 0xFEFC, (L::Al, G::Lo)),
    (0xFEFF, 0xFEFF, (L::Wj, G::Cf)),
    (0xFF01, 0xFF01, (L::Ex, G::Po)),
    (0xFF02, 0xFF03, (L::Id, G::Po)),
    (0xFF04, 0xFF04, (L::Pr, G::Sc)),
    (0xFF05, 0xFF05, (L::Po, G::Po)),
    (0xFF06, 0xFF07, (L::Id, G::Po)),
    (0xFF08, 0xFF08, (L::Op, G::Ps)),
    (0xFF09, 0xFF09, (L::Cl, G::Pe)),
    (0xFF0A, 0xFF0A, (L::Id, G::Po)),
    (0xFF0B, 0xFF0B, (L::Id, G::Sm)),
    (0xFF0C, 0xFF0C, (L::Cl, G::Po)),
    (0xFF0D, 0xFF0D, (L::Id, G::Pd)),
    (0xFF0E, 0xFF0E, (L::Cl, G::Po)),
    (0xFF0F, 0xFF0F, (L::Id, G::Po)),
    (0xFF10, 0xFF19, (L::Id, G::Nd)),
    (0xFF1A, 0xFF1B, (L::Ns, G::Po)),
    (0xFF1C, 0xFF1E, (L::Id, G::Sm)),
    (0xFF1F, 0xFF1F, (L::Ex, G::Po)),
    (0xFF20, 0xFF20, (L::Id, G::Po)),
    (0xFF21, 0xFF3A, (L::Id, G::Lu)),
    (0xFF3B, 0xFF3B, (L::Op, G::Ps)),
    (0xFF3C, 0xFF3C, (L::Id, G::Po)),
    (0xFF3D, 0xFF3D, (L::Cl, G::Pe)),
    (0xFF3E, 0xFF3E, (L::Id, G::Sk)),
    (0xFF3F, 0xFF3F, (L::Id, G::Pc)),
    (0xFF40, 0xFF40, (L::Id, G::Sk)),
    (0xFF41, 0xFF5A, (L::Id, G::Ll)),
    (0xFF5B, 0xFF5B, (L::Op, G::Ps)),
    (0xFF5C, 0xFF5C, (L::Id, G::Sm)),
    (0xFF5D, 0xFF5D, (L::Cl, G::Pe)),
    (0xFF5E, 0xFF5E, (L::Id, G::Sm)),
    (0xFF5F, 0xFF5F, (L::Op, G::Ps)),
    (0xFF60, 0xFF60, (L::Cl, G::Pe)),
    (0xFF61, 0xFF61, (L::Cl, G::Po)),
    (0xFF62, 0xFF62, (L::Op, G::Ps)),
    (0xFF63, 0xFF63, (L::Cl, G::Pe)),
    (0xFF64, 0xFF64, (L::Cl, G::Po)),
    (0xFF65, 0xFF65, (L::Ns, G::Po)),
    (0xFF66, 0xFF66, (L::Id, G::Lo)),
    (0xFF67, 0xFF6F, (L::Cj, G::Lo)),
    (0xFF70, 0xFF70, (L::Cj, G::Lm)),
    (0xFF71, 0xFF9D, (L::Id, G::Lo)),
    (0xFF9E, 0xFF9F, (L::Ns, G::Lm)),
    (0xFFA0, 0xFFBE, (L::Id, G::Lo)),
    (0xFFC2, 0xFFC7, (L::Id, G::Lo)),
    (0xFFCA, 0xFFCF, (L::Id, G::Lo)),
    (0xFFD2, 0xFFD7, (L::Id, G::Lo)),
    (0xFFDA, 0xFFDC, (L::Id, G::Lo)),
    (0xFFE0, 0xFFE0, (L::Po, G::Sc)),
    (0xFFE1, 0xFFE1, (L::Pr, G::Sc)),
    (0xFFE2, 0xFFE2, (L::Id, G::Sm)),
    (0xFFE3, 0xFFE3, (L::Id, G::Sk)),
    (0xFFE4, 0xFFE4, (L::Id, G::So)),
    (0xFFE5, 0xFFE6, (L::Pr, G::Sc)),
    (0xFFE8, 0xFFE8, (L::Al, G::So)),
    (0xFFE9, 0xFFEC, (L::Al, G::Sm)),
    (0xFFED, 0xFFEE, (L::Al, G::So)),
    (0xFFF9, 0xFFFB, (L::Cm, G::Cf)),
    (0xFFFC, 0xFFFC, (L::Cb, G::So)),
    (0xFFFD, 0xFFFD, (L::Ai, G::So)),
    (0x10000, 0x1000B, (L::Al, G::Lo)),
    (0x1000D, 0x10026, (L::Al, G::Lo)),
    (0x10028, 0x1003A, (L::Al, G::Lo)),
    (0x1003C, 0x1003D, (L::Al, G::Lo)),
    (0x1003F, 0x1004D, (L::Al, G::Lo)),
    (0x10050, 0x1005D, (L::Al, G::Lo)),
    (0x10080, 0x100FA, (L::Al, G::Lo)),
    (0x10100, 0x10102, (L::Ba, G::Po)),
    (0x10107, 0x10133, (L::Al, G::No)),
    (0x10137, 0x1013F, (L::Al, G::So)),
    (0x10140, 0x10174, (L::Al, G::Nl)),
    (0x10175, 0x10178, (L::Al, G::No)),
    (0x10179, 0x10189, (L::Al, G::So)),
    (0x1018A, 0x1018B, (L::Al, G::No)),
    (0x1018C, 0x1018E, (L::Al, G::So)),
    (0x10190, 0x1019C, (L::Al, G::So)),
    (0x101A0, 0x101A0, (L::Al, G::So)),
    (0x101D0, 0x101FC, (L::Al, G::So)),
    (0x101FD, 0x101FD, (L::Cm, G::Mn)),
    (0x10280, 0x1029C, (L::Al, G::Lo)),
    (0x102A0, 0x102D0, (L::Al, G::Lo)),
    (0x102E0, 0x102E0, (L::Cm, G::Mn)),
    (0x102E1, 0x102FB, (L::Al, G::No)),
    (0x10300, 0x1031F, (L::Al, G::Lo)),
    (0x10320, 0x10323, (L::Al, G::No)),
    (0x1032D, 0x10340, (L::Al, G::Lo)),
    (0x10341, 0x10341, (L::Al, G::Nl)),
    (0x10342, 0x10349, (L::Al, G::Lo)),
    (0x1034A, 0x1034A, (L::Al, G::Nl)),
    (0x10350, 0x10375, (L::Al, G::Lo)),
    (0x10376, 0x1037A, (L::Cm, G::Mn)),
    (0x10380, 0x1039D, (L::Al, G::Lo)),
    (0x1039F, 0x1039F, (L::Ba, G::Po)),
    (0x103A0, 0x103C3, (L::Al, G::Lo)),
    (0x103C8, 0x103CF, (L::Al, G::Lo)),
    (0x103D0, 0x103D0, (L::Ba, G::Po)),
    (0x103D1, 0x103D5, (L::Al, G::Nl)),
    (0x10400, 0x10427, (L::Al, G::Lu)),
    (0x10428, 0x1044F, (L::Al, G::Ll)),
    (0x10450, 0x1049D, (L::Al, G::Lo)),
    (0x104A0, 0x104A9, (L::Nu, G::Nd)),
    (0x104B0, 0x104D3, (L::Al, G::Lu)),
    (0x104D8, 0x104FB, (L::Al, G::Ll)),
    (0x10500, 0x10527, (L::Al, G::Lo)),
    (0x10530, 0x10563, (L::Al, G::Lo)),
    (0x1056F, 0x1056F, (L::Al, G::Po)),
    (0x10570, 0x1057A, (L::Al, G::Lu)),
    (0x1057C, 0x1058A, (L::Al, G::Lu)),
    (0x1058C, 0x10592, (L::Al, G::Lu)),
    (0x10594, 0x10595, (L::Al, G::Lu)),
    (0x10597, 0x105A1, (L::Al, G::Ll)),
    (0x105A3, 0x105B1, (L::Al, G::Ll)),
    (0x105B3, 0x105B9, (L::Al, G::Ll)),
    (0x105BB, 0x105BC, (L::Al, G::Ll)),
    (0x105C0, 0x105F3, (L::Al, G::Lo)),
    (0x10600, 0x10736, (L::Al, G::Lo)),
    (0x10740, 0x10755, (L::Al, G::Lo)),
    (0x10760, 0x10767, (L::Al, G::Lo)),
    (0x10780, 0x10785, (L::Al, G::Lm)),
    (0x10787, 0x107B0, (L::Al, G::Lm)),
    (0x107B2, 0x107BA, (L::Al, G::Lm)),
    (0x10800, 0x10805, (L::Al, G::Lo)),
    (0x10808, 0x10808, (L::Al, G::Lo)),
    (0x1080A, 0x10835, (L::Al, G::Lo)),
    (0x10837, 0x10838, (L::Al, G::Lo)),
    (0x1083C, 0x1083C, (L::Al, G::Lo)),
    (0x1083F, 0x10855, (L::Al, G::Lo)),
    (0x10857, 0x10857, (L::Ba, G::Po)),
    (0x10858, 0x1085F, (L::Al, G::No)),
    (0x10860, 0x10876, (L::Al, G::Lo)),
    (0x10877, 0x10878, (L::Al, G::So)),
    (0x10879, 0x1087F, (L::Al, G::No)),
    (0x10880, 0x1089E, (L::Al, G::Lo)),
    (0x108A7, 0x108AF, (L::Al, G::No)),
    (0x108E0, 0x108F2, (L::Al, G::Lo)),
    (0x108F4, 0x108F5, (L::Al, G::Lo)),
    (0x108FB, 0x108FF, (L::Al, G::No)),
    (0x10900, 0x10915, (L::Al, G::Lo)),
    (0x10916, 0x1091B, (L::Al, G::No)),
    (0x1091F, 0x1091F, (L::Ba, G::Po)),
    (0x10920, 0x10939, (L::Al, G::Lo)),
    (0x1093F, 0x1093F, (L::Al, G::Po)),
    (0x10940, 0x10959, (L::Al, G::Lo)),
    (0x10980, 0x109B7, (L::Al, G::Lo)),
    (0x109BC, 0x109BD, (L::Al, G::No)),
    (0x109BE, 0x109BF, (L::Al, G::Lo)),
    (0x109C0, 0x109CF, (L::Al, G::No)),
    (0x109D2, 0x109FF, (L::Al, G::No)),
    (0x10A00, 0x10A00, (L::Al, G::Lo)),
    (0x10A01, 0x10A03, (L::Cm, G::Mn)),
    (0x10A05, 0x10A06, (L::Cm, G::Mn)),
    (0x10A0C, 0x10A0F, (L::Cm, G::Mn)),
    (0x10A10, 0x10A13, (L::Al, G::Lo)),
    (0x10A15, 0x10A17, (L::Al, G::Lo)),
    (0x10A19, 0x10A35, (L::Al, G::Lo)),
    (0x10A38, 0x10A3A, (L::Cm, G::Mn)),
    (0x10A3F, 0x10A3F, (L::Cm, G::Mn)),
    (0x10A40, 0x10A48, (L::Al, G::No)),
    (0x10A50, 0x10A57, (L::Ba, G::Po)),
    (0x10A58, 0x10A58, (L::Al, G::Po)),
    (0x10A60, 0x10A7C, (L::Al, G::Lo)),
    (0x10A7D, 0x10A7E, (L::Al, G::No)),
    (0x10A7F, 0x10A7F, (L::Al, G::Po)),
    (0x10A80, 0x10A9C, (L::Al, G::Lo)),
    (0x10A9D, 0x10A9F, (L::Al, G::No)),
    (0x10AC0, 0x10AC7, (L::Al, G::Lo)),
    (0x10AC8, 0x10AC8, (L::Al, G::So)),
    (0x10AC9, 0x10AE4, (L::Al, G::Lo)),
    (0x10AE5, 0x10AE6, (L::Cm, G::Mn)),
    (0x10AEB, 0x10AEF, (L::Al, G::No)),
    (0x10AF0, 0x10AF5, (L::Ba, G::Po)),
    (0x10AF6, 0x10AF6, (L::In, G::Po)),
    (0x10B00, 0x10B35, (L::Al, G::Lo)),
    (0x10B39, 0x10B3F, (L::Ba, G::Po)),
    (0x10B40, 0x10B55, (L::Al, G::Lo)),
    (0x10B58, 0x10B5F, (L::Al, G::No)),
    (0x10B60, 0x10B72, (L::Al, G::Lo)),
    (0x10B78, 0x10B7F, (L::Al, G::No)),
    (0x10B80, 0x10B91, (L::Al, G::Lo)),
    (0x10B99, 0x10B9C, (L::Al, G::Po)),
    (0x10BA9, 0x10BAF, (L::Al, G::No)),
    (0x10C00, 0x10C48, (L::Al, G::Lo)),
    (0x10C80, 0x10CB2, (L::Al, G::Lu)),
    (0x10CC0, 0x10CF2, (L::Al, G::Ll)),
    (0x10CFA, 0x10CFF, (L::Al, G::No)),
    (0x10D00, 0x10D23, (L::Al, G::Lo)),
    (0x10D24, 0x10D27, (L::Cm, G::Mn)),
    (0x10D30, 0x10D39, (L::Nu, G::Nd)),
    (0x10D40, 0x10D49, (L::Nu, G::Nd)),
    (0x10D4A, 0x10D4D, (L::Al, G::Lo)),
    (0x10D4E, 0x10D4E, (L::Al, G::Lm)),
    (0x10D4F, 0x10D4F, (L::Al, G::Lo)),
    (0x10D50, 0x10D65, (L::Al, G::Lu)),
    (0x10D69, 0x10D6D, (L::Cm, G::Mn)),
    (0x10D6F, 0x10D6F, (L::Al, G::Lm)),
    (0x10D70, 0x10D85, (L::Al, G::Ll)),
    (0x10D8E, 0x10D8F, (L::Al, G::Sm)),
    (0x10E60, 0x10E7E, (L::Al, G::No)),
    (0x10E80, 0x10EA9, (L::Al, G::Lo)),
    (0x10EAB, 0x10EAC, (L::Cm, G::Mn)),
    (0x10EB0, 0x10EB1, (L::Al, G::Lo)),
    (0x10EC2, 0x10EC4, (L::Al, G::Lo)),
    (0x10EC5, 0x10EC5, (L::Al, G::Lm)),
    (0x10EC6, 0x10EC7, (L::Al, G::Lo)),
    (0x10ED0, 0x10ED0, (L::Ba, G::Po)),
    (0x10ED1, 0x10ED8, (L::Al, G::So)),
    (0x10EFA, 0x10EFF, (L::Cm, G::Mn)),
    (0x10F00, 0x10F1C, (L::Al, G::Lo)),
    (0x10F1D, 0x10F26, (L::Al, G::No)),
    (0x10F27, 0x10F27, (L::Al, G::Lo)),
    (0x10F30, 0x10F45, (L::Al, G::Lo)),
    (0x10F46, 0x10F50, (L::Cm, G::Mn)),
    (0x10F51, 0x10F54, (L::Al, G::No)),
    (0x10F55, 0x10F59, (L::Al, G::Po)),
    (0x10F70, 0x10F81, (L::Al, G::Lo)),
    (0x10F82, 0x10F85, (L::Cm, G::Mn)),
    (0x10F86, 0x10F89, (L::Al, G::Po)),
    (0x10FB0, 0x10FC4, (L::Al, G::Lo)),
    (0x10FC5, 0x10FCB, (L::Al, G::No)),
    (0x10FE0, 0x10FF6, (L::Al, G::Lo)),
    (0x11000, 0x11000, (L::Cm, G::Mc)),
    (0x11001, 0x11001, (L::Cm, G::Mn)),
    (0x11002, 0x11002, (L::Cm, G::Mc)),
    (0x11003, 0x11004, (L::Ap, G::Lo)),
    (0x11005, 0x11037, (L::Ak, G::Lo)),
    (0x11038, 0x11045, (L::Cm, G::Mn)),
    (0x11046, 0x11046, (L::Vi, G::Mn)),
    (0x11047, 0x11048, (L::Ba, G::Po)),
    (0x11049, 0x1104D, (L::Id, G::Po)),
    (0x11052, 0x11065, (L::Id, G::No)),
    (0x11066, 0x1106F, (L::As, G::Nd)),
    (0x11070, 0x11070, (L::Cm, G::Mn)),
    (0x11071, 0x11072, (L::Ak, G::Lo)),
    (0x11073, 0x11074, (L::Cm, G::Mn)),
    (0x11075, 0x11075, (L::Ak, G::Lo)),
    (0x1107F, 0x1107F, (L::Gl, G::Mn)),
    (0x11080, 0x11081, (L::Cm, G::Mn)),
    (0x11082, 0x11082, (L::Cm, G::Mc)),
    (0x11083, 0x110AF, (L::Al, G::Lo)),
    (0x110B0, 0x110B2, (L::Cm, G::Mc)),
    (0x110B3, 0x110B6, (L::Cm, G::Mn)),
    (0x110B7, 0x110B8, (L::Cm, G::Mc)),
    (0x110B9, 0x110BA, (L::Cm, G::Mn)),
    (0x110BB, 0x110BC, (L::Al, G::Po)),
    (0x110BD, 0x110BD, (L::Nu, G::Cf)),
    (0x110BE, 0x110C1, (L::Ba, G::Po)),
    (0x110C2, 0x110C2, (L::Cm, G::Mn)),
    (0x110CD, 0x110CD, (L::Nu, G::Cf)),
    (0x110D0, 0x110E8, (L::Al, G::Lo)),
    (0x110F0, 0x110F9, (L::Nu, G::Nd)),
    (0x11100, 0x11102, (L::Cm, G::Mn)),
    (0x11103, 0x11126, (L::Al, G::Lo)),
    (0x11127, 0x1112B, (L::Cm, G::Mn)),
    (0x1112C, 0x1112C, (L::Cm, G::Mc)),
    (0x1112D, 0x11134, (L::Cm, G::Mn)),
    (0x11136, 0x1113F, (L::Nu, G::Nd)),
    (0x11140, 0x11143, (L::Ba, G::Po)),
    (0x11144, 0x11144, (L::Al, G::Lo)),
    (0x11145, 0x11146, (L::Cm, G::Mc)),
    (0x11147, 0x11147, (L::Al, G::Lo)),
    (0x11150, 0x11172, (L::Al, G::Lo)),
    (0x11173, 0x11173, (L::Cm, G::Mn)),
    (0x11174, 0x11174, (L::Al, G::Po)),
    (0x11175, 0x11175, (L::Bb, G::Po)),
    (0x11176, 0x11176, (L::Al, G::Lo)),
    (0x11180, 0x11181, (L::Cm, G::Mn)),
    (0x11182, 0x11182, (L::Cm, G::Mc)),
    (0x11183, 0x111B2, (L::Al, G::Lo)),
    (0x111B3, 0x111B5, (L::Cm, G::Mc)),
    (0x111B6, 0x111BE, (L::Cm, G::Mn)),
    (0x111BF, 0x111C0, (L::Cm, G::Mc)),
    (0x111C1, 0x111C4, (L::Al, G::Lo)),
    (0x111C5, 0x111C6, (L::Ba, G::Po)),
    (0x111C7, 0x111C7, (L::Al, G::Po)),
    (0x111C8, 0x111C8, (L::Ba, G::Po)),
    (0x111C9, 0x111CC, (L::Cm, G::Mn)),
    (0x111CD, 0x111CD, (L::Al, G::Po)),
    (0x111CE, 0x111CE, (L::Cm, G::Mc)),
    (0x111CF, 0x111CF, (L::Cm, G::Mn)),
    (0x111D0, 0x111D9, (L::Nu, G::Nd)),
    (0x111DA, 0x111DA, (L::Al, G::Lo)),
    (0x111DB, 0x111DB, (L::Bb, G::Po)),
    (0x111DC, 0x111DC, (L::Al, G::Lo)),
    (0x111DD, 0x111DF, (L::Ba, G::Po)),
    (0x111E1, 0x111F4, (L::Al, G::No)),
    (0x11200, 0x11211, (L::Al, G::Lo)),
    (0x11213, 0x1122B, (L::Al, G::Lo)),
    (0x1122C, 0x1122E, (L::Cm, G::Mc)),
    (0x1122F, 0x11231, (L::Cm, G::Mn)),
    (0x11232, 0x11233, (L::Cm, G::Mc)),
    (0x11234, 0x11234, (L::Cm, G::Mn)),
    (0x11235, 0x11235, (L::Cm, G::Mc)),
    (0x11236, 0x11237, (L::Cm, G::Mn)),
    (0x11238, 0x11239, (L::Ba, G::Po)),
    (0x1123A, 0x1123A, (L::Al, G::Po)),
    (0x1123B, 0x1123C, (L::Ba, G::Po)),
    (0x1123D, 0x1123D, (L::Al, G::Po)),
    (0x1123E, 0x1123E, (L::Cm, G::Mn)),
    (0x1123F, 0x11240, (L::Al, G::Lo)),
    (0x11241, 0x11241, (L::Cm, G::Mn)),
    (0x11280, 0x11286, (L::Al, G::Lo)),
    (0x11288, 0x11288, (L::Al, G::Lo)),
    (0x1128A, 0x1128D, (L::Al, G::Lo)),
    (0x1128F, 0x1129D, (L::Al, G::Lo)),
    (0x1129F, 0x112A8, (L::Al, G::Lo)),
    (0x112A9, 0x112A9, (L::Ba, G::Po)),
    (0x112B0, 0x112DE, (L::Al, G::Lo)),
    (0x112DF, 0x112DF, (L::Cm, G::Mn)),
    (0x112E0, 0x112E2, (L::Cm, G::Mc)),
    (0x112E3, 0x112EA, (L::Cm, G::Mn)),
    (0x112F0, 0x112F9, (L::Nu, G::Nd)),
    (0x11300, 0x11301, (L::Cm, G::Mn)),
    (0x11302, 0x11303, (L::Cm, G::Mc)),
    (0x11305, 0x1130C, (L::Ak, G::Lo)),
    (0x1130F, 0x11310, (L::Ak, G::Lo)),
    (0x11313, 0x11328, (L::Ak, G::Lo)),
    (0x1132A, 0x11330, (L::Ak, G::Lo)),
    (0x11332, 0x11333, (L::Ak, G::Lo)),
    (0x11335, 0x11339, (L::Ak, G::Lo)),
    (0x1133B, 0x1133C, (L::Cm, G::Mn)),
    (0x1133D, 0x1133D, (L::Ba, G::Lo)),
    (0x1133E, 0x1133F, (L::Cm, G::Mc)),
    (0x11340, 0x11340, (L::Cm, G::Mn)),
    (0x11341, 0x11344, (L::Cm, G::Mc)),
    (0x11347, 0x11348, (L::Cm, G::Mc)),
    (0x1134B, 0x1134C, (L::Cm, G::Mc)),
    (0x1134D, 0x1134D, (L::Vi, G::Mc)),
    (0x11350, 0x11350, (L::As, G::Lo)),
    (0x11357, 0x11357, (L::Cm, G::Mc)),
    (0x1135D, 0x1135D, (L::Ba, G::Lo)),
    (0x1135E, 0x1135F, (L::As, G::Lo)),
    (0x11360, 0x11361, (L::Ak, G::Lo)),
    (0x11362, 0x11363, (L::Cm, G::Mc)),
    (0x11366, 0x1136C, (L::Cm, G::Mn)),
    (0x11370, 0x11374, (L::Cm, G::Mn)),
    (0x11380, 0x11389, (L::As, G::Lo)),
    (0x1138B, 0x1138B, (L::As, G::Lo)),
    (0x1138E, 0x1138E, (L::As, G::Lo)),
    (0x11390, 0x11391, (L::As, G::Lo)),
    (0x11392, 0x113B5, (L::Ak, G::Lo)),
    (0x113B7, 0x113B7, (L::Id, G::Lo)),
    (0x113B8, 0x113BA, (L::Cm, G::Mc)),
    (0x113BB, 0x113C0, (L::Cm, G::Mn)),
    (0x113C2, 0x113C2, (L::Cm, G::Mc)),
    (0x113C5, 0x113C5, (L::Cm, G::Mc)),
    (0x113C7, 0x113CA, (L::Cm, G::Mc)),
    (0x113CC, 0x113CD, (L::Cm, G::Mc)),
    (0x113CE, 0x113CE, (L::Cm, G::Mn)),
    (0x113CF, 0x113CF, (L::Cm, G::Mc)),
    (0x113D0, 0x113D0, (L::Vi, G::Mn)),
    (0x113D1, 0x113D1, (L::Ap, G::Lo)),
    (0x113D2, 0x113D2, (L::Cm, G::Mn)),
    (0x113D3, 0x113D3, (L::Id, G::Lo)),
    (0x113D4, 0x113D5, (L::Id, G::Po)),
    (0x113D7, 0x113D8, (L::Id, G::Po)),
    (0x113E1, 0x113E2, (L::Cm, G::Mn)),
    (0x11400, 0x11434, (L::Al, G::Lo)),
    (0x11435, 0x11437, (L::Cm, G::Mc)),
    (0x11438, 0x1143F, (L::Cm, G::Mn)),
    (0x11440, 0x11441, (L::Cm, G::Mc)),
    (0x11442, 0x11444, (L::Cm, G::Mn)),
    (0x11445, 0x11445, (L::Cm, G::Mc)),
    (0x11446, 0x11446, (L::Cm, G::Mn)),
    (0x11447, 0x1144A, (L::Al, G::Lo)),
    (0x1144B, 0x1144E, (L::Ba, G::Po)),
    (0x1144F, 0x1144F, (L::Al, G::Po)),
    (0x11450, 0x11459, (L::Nu, G::Nd)),
    (0x1145A, 0x1145B, (L::Ba, G::Po)),
    (0x1145D, 0x1145D, (L::Al, G::Po)),
    (0x1145E, 0x1145E, (L::Cm, G::Mn)),
    (0x1145F, 0x11461, (L::Al, G::Lo)),
    (0x11480, 0x114AF, (L::Al, G::Lo)),
    (0x114B0, 0x114B2, (L::Cm, G::Mc)),
    (0x114B3, 0x114B8, (L::Cm, G::Mn)),
    (0x114B9, 0x114B9, (L::Cm, G::Mc)),
    (0x114BA, 0x114BA, (L::Cm, G::Mn)),
    (0x114BB, 0x114BE, (L::Cm, G::Mc)),
    (0x114BF, 0x114C0, (L::Cm, G::Mn)),
    (0x114C1, 0x114C1, (L::Cm, G::Mc)),
    (0x114C2, 0x114C3, (L::Cm, G::Mn)),
    (0x114C4, 0x114C5, (L::Al, G::Lo)),
    (0x114C6, 0x114C6, (L::Al, G::Po)),
    (0x114C7, 0x114C7, (L::Al, G::Lo)),
    (0x114D0, 0x114D9, (L::Nu, G::Nd)),
    (0x11580, 0x115AE, (L::Al, G::Lo)),
    (0x115AF, 0x115B1, (L::Cm, G::Mc)),
    (0x115B2, 0x115B5, (L::Cm, G::Mn)),
    (0x115B8, 0x115BB, (L::Cm, G::Mc)),
    (0x115BC, 0x115BD, (L::Cm, G::Mn)),
    (0x115BE, 0x115BE, (L::Cm, G::Mc)),
    (0x115BF, 0x115C0, (L::Cm, G::Mn)),
    (0x115C1, 0x115C1, (L::Bb, G::Po)),
    (0x115C2, 0x115C3, (L::Ba, G::Po)),
    (0x115C4, 0x115C5, (L::Ex, G::Po)),
    (0x115C6, 0x115C8, (L::Al, G::Po)),
    (0x115C9, 0x115D7, (L::Ba, G::Po)),
    (0x115D8, 0x115DB, (L::Al, G::Lo)),
    (0x115DC, 0x115DD, (L::Cm, G::Mn)),
    (0x11600, 0x1162F, (L::Al, G::Lo)),
    (0x11630, 0x11632, (L::Cm, G::Mc)),
    (0x11633, 0x1163A, (L::Cm, G::Mn)),
    (0x1163B, 0x1163C, (L::Cm, G::Mc)),
    (0x1163D, 0x1163D, (L::Cm, G::Mn)),
    (0x1163E, 0x1163E, (L::Cm, G::Mc)),
    (0x1163F, 0x11640, (L::Cm, G::Mn)),
    (0x11641, 0x11642, (L::Ba, G::Po)),
    (0x11643, 0x11643, (L::Al, G::Po)),
    (0x11644, 0x11644, (L::Al, G::Lo)),
    (0x11650, 0x11659, (L::Nu, G::Nd)),
    (0x11660, 0x1166C, (L::Bb, G::Po)),
    (0x11680, 0x116AA, (L::Al, G::Lo)),
    (0x116AB, 0x116AB, (L::Cm, G::Mn)),
    (0x116AC, 0x116AC, (L::Cm, G::Mc)),
    (0x116AD, 0x116AD, (L::Cm, G::Mn)),
    (0x116AE, 0x116AF, (L::Cm, G::Mc)),
    (0x116B0, 0x116B5, (L::Cm, G::Mn)),
    (0x116B6, 0x116B6, (L::Cm, G::Mc)),
    (0x116B7, 0x116B7, (L::Cm, G::Mn)),
    (0x116B8, 0x116B8, (L::Al, G::Lo)),
    (0x116B9, 0x116B9, (L::Al, G::Po)),
    (0x116C0, 0x116C9, (L::Nu, G::Nd)),
    (0x116D0, 0x116E3, (L::Nu, G::Nd)),
    (0x11700, 0x1171A, (L::Sa, G::Lo)),
    (0x1171D, 0x1171D, (L::Sa, G::Mn)),
    (0x1171E, 0x1171E, (L::Sa, G::Mc)),
    (0x1171F, 0x1171F, (L::Sa, G::Mn)),
    (0x11720, 0x11721, (L::Sa, G::Mc)),
    (0x11722, 0x11725, (L::Sa, G::Mn)),
    (0x11726, 0x11726, (L::Sa, G::Mc)),
    (0x11727, 0x1172B, (L::Sa, G::Mn)),
    (0x11730, 0x11739, (L::Nu, G::Nd)),
    (0x1173A, 0x1173B, (L::Sa, G::No)),
    (0x1173C, 0x1173E, (L::Ba, G::Po)),
    (0x1173F, 0x1173F, (L::Sa, G::So)),
    (0x11740, 0x11746, (L::Sa, G::Lo)),
    (0x11800, 0x1182B, (L::Al, G::Lo)),
    (0x1182C, 0x1182E, (L::Cm, G::Mc)),
    (0x1182F, 0x11837, (L::Cm, G::Mn)),
    (0x11838, 0x11838, (L::Cm, G::Mc)),
    (0x11839, 0x1183A, (L::Cm, G::Mn)),
    (0x1183B, 0x1183B, (L::Al, G::Po)),
    (0x118A0, 0x118BF, (L::Al, G::Lu)),
    (0x118C0, 0x118DF, (L::Al, G::Ll)),
    (0x118E0, 0x118E9, (L::Nu, G::Nd)),
    (0x118EA, 0x118F2, (L::Al, G::No)),
    (0x118FF, 0x118FF, (L::Al, G::Lo)),
    (0x11900, 0x11906, (L::Ak, G::Lo)),
    (0x11909, 0x11909, (L::Ak, G::Lo)),
    (0x1190C, 0x11913, (L::Ak, G::Lo)),
    (0x11915, 0x11916, (L::Ak, G::Lo)),
    (0x11918, 0x1192F, (L::Ak, G::Lo)),
    (0x11930, 0x11935, (L::Cm, G::Mc)),
    (0x11937, 0x11938, (L::Cm, G::Mc)),
    (0x1193B, 0x1193C, (L::Cm, G::Mn)),
    (0x1193D, 0x1193D, (L::Cm, G::Mc)),
    (0x1193E, 0x1193E, (L::Vi, G::Mn)),
    (0x1193F, 0x1193F, (L::Ap, G::Lo)),
    (0x11940, 0x11940, (L::Cm, G::Mc)),
    (0x11941, 0x11941, (L::Ap, G::Lo)),
    (0x11942, 0x11942, (L::Cm, G::Mc)),
    (0x11943, 0x11943, (L::Cm, G::Mn)),
    (0x11944, 0x11946, (L::Ba, G::Po)),
    (0x11950, 0x11959, (L::As, G::Nd)),
    (0x119A0, 0x119A7, (L::Al, G::Lo)),
    (0x119AA, 0x119D0, (L::Al, G::Lo)),
    (0x119D1, 0x119D3, (L::Cm, G::Mc)),
    (0x119D4, 0x119D7, (L::Cm, G::Mn)),
    (0x119DA, 0x119DB, (L::Cm, G::Mn)),
    (0x119DC, 0x119DF, (L::Cm, G::Mc)),
    (0x119E0, 0x119E0, (L::Cm, G::Mn)),
    (0x119E1, 0x119E1, (L::Al, G::Lo)),
    (0x119E2, 0x119E2, (L::Bb, G::Po)),
    (0x119E3, 0x119E3, (L::Al, G::Lo)),
    (0x119E4, 0x119E4, (L::Cm, G::Mc)),
    (0x11A00, 0x11A00, (L::Al, G::Lo)),
    (0x11A01, 0x11A0A, (L::Cm, G::Mn)),
    (0x11A0B, 0x11A32, (L::Al, G::Lo)),
    (0x11A33, 0x11A38, (L::Cm, G::Mn)),
    (0x11A39, 0x11A39, (L::Cm, G::Mc)),
    (0x11A3A, 0x11A3A, (L::Al, G::Lo)),
    (0x11A3B, 0x11A3E, (L::Cm, G::Mn)),
    (0x11A3F, 0x11A3F, (L::Bb, G::Po)),
    (0x11A40, 0x11A40, (L::Al, G::Po)),
    (0x11A41, 0x11A44, (L::Ba, G::Po)),
    (0x11A45, 0x11A45, (L::Bb, G::Po)),
    (0x11A46, 0x11A46, (L::Al, G::Po)),
    (0x11A47, 0x11A47, (L::Cm, G::Mn)),
    (0x11A50, 0x11A50, (L::Al, G::Lo)),
    (0x11A51, 0x11A56, (L::Cm, G::Mn)),
    (0x11A57, 0x11A58, (L::Cm, G::Mc)),
    (0x11A59, 0x11A5B, (L::Cm, G::Mn)),
    (0x11A5C, 0x11A89, (L::Al, G::Lo)),
    (0x11A8A, 0x11A96, (L::Cm, G::Mn)),
    (0x11A97, 0x11A97, (L::Cm, G::Mc)),
    (0x11A98, 0x11A99, (L::Cm, G::Mn)),
    (0x11A9A, 0x11A9C, (L::Ba, G::Po)),
    (0x11A9D, 0x11A9D, (L::Al, G::Lo)),
    (0x11A9E, 0x11AA0, (L::Bb, G::Po)),
    (0x11AA1, 0x11AA2, (L::Ba, G::Po)),
    (0x11AB0, 0x11AF8, (L::Al, G::Lo)),
    (0x11B00, 0x11B09, (L::Bb, G::Po)),
    (0x11B60, 0x11B60, (L::Cm, G::Mn)),
    (0x11B61, 0x11B61, (L::Cm, G::Mc)),
    (0x11B62, 0x11B64, (L::Cm, G::Mn)),
    (0x11B65, 0x11B65, (L::Cm, G::Mc)),
    (0x11B66, 0x11B66, (L::Cm, G::Mn)),
    (0x11B67, 0x11B67, (L::Cm, G::Mc)),
    (0x11BC0, 0x11BE0, (L::Al, G::Lo)),
    (0x11BE1, 0x11BE1, (L::Al, G::Po)),
    (0x11BF0, 0x11BF9, (L::Nu, G::Nd)),
    (0x11C00, 0x11C08, (L::Al, G::Lo)),
    (0x11C0A, 0x11C2E, (L::Al, G::Lo)),
    (0x11C2F, 0x11C2F, (L::Cm, G::Mc)),
    (0x11C30, 0x11C36, (L::Cm, G::Mn)),
    (0x11C38, 0x11C3D, (L::Cm, G::Mn)),
    (0x11C3E, 0x11C3E, (L::Cm, G::Mc)),
    (0x11C3F, 0x11C3F, (L::Cm, G::Mn)),
    (0x11C40, 0x11C40, (L::Al, G::Lo)),
    (0x11C41, 0x11C45, (L::Ba, G::Po)),
    (0x11C50, 0x11C59, (L::Nu, G::Nd)),
    (0x11C5A, 0x11C6C, (L::Al, G::No)),
    (0x11C70, 0x11C70, (L::Bb, G::Po)),
    (0x11C71, 0x11C71, (L::Ex, G::Po)),
    (0x11C72, 0x11C8F, (L::Al, G::Lo)),
    (0x11C92, 0x11CA7, (L::Cm, G::Mn)),
    (0x11CA9, 0x11CA9, (L::Cm, G::Mc)),
    (0x11CAA, 0x11CB0, (L::Cm, G::Mn)),
    (0x11CB1, 0x11CB1, (L::Cm, G::Mc)),
    (0x11CB2, 0x11CB3, (L::Cm, G::Mn)),
    (0x11CB4, 0x11CB4, (L::Cm, G::Mc)),
    (0x11CB5, 0x11CB6, (L::Cm, G::Mn)),
    (0x11D00, 0x11D06, (L::Al, G::Lo)),
    (0x11D08, 0x11D09, (L::Al, G::Lo)),
    (0x11D0B, 0x11D30, (L::Al, G::Lo)),
    (0x11D31, 0x11D36, (L::Cm, G::Mn)),
    (0x11D3A, 0x11D3A, (L::Cm, G::Mn)),
    (0x11D3C, 0x11D3D, (L::Cm, G::Mn)),
    (0x11D3F, 0x11D45, (L::Cm, G::Mn)),
    (0x11D46, 0x11D46, (L::Al, G::Lo)),
    (0x11D47, 0x11D47, (L::Cm, G::Mn)),
    (0x11D50, 0x11D59, (L::Nu, G::Nd)),
    (0x11D60, 0x11D65, (L::Al, G::Lo)),
    (0x11D67, 0x11D68, (L::Al, G::Lo)),
    (0x11D6A, 0x11D89, (L::Al, G::Lo)),
    (0x11D8A, 0x11D8E, (L::Cm, G::Mc)),
    (0x11D90, 0x11D91, (L::Cm, G::Mn)),
    (0x11D93, 0x11D94, (L::Cm, G::Mc)),
    (0x11D95, 0x11D95, (L::Cm, G::Mn)),
    (0x11D96, 0x11D96, (L::Cm, G::Mc)),
    (0x11D97, 0x11D97, (L::Cm, G::Mn)),
    (0x11D98, 0x11D98, (L::Al, G::Lo)),
    (0x11DA0, 0x11DA9, (L::Nu, G::Nd)),
    (0x11DB0, 0x11DD8, (L::Al, G::Lo)),
    (0x11DD9, 0x11DD9, (L::Al, G::Lm)),
    (0x11DDA, 0x11DDB, (L::Al, G::Lo)),
    (0x11DE0, 0x11DE9, (L::Nu, G::Nd)),
    (0x11EE0, 0x11EF1, (L::As, G::Lo)),
    (0x11EF2, 0x11EF2, (L::Ba, G::Lo)),
    (0x11EF3, 0x11EF4, (L::Cm, G::Mn)),
    (0x11EF5, 0x11EF6, (L::Cm, G::Mc)),
    (0x11EF7, 0x11EF8, (L::Ba, G::Po)),
    (0x11F00, 0x11F01, (L::Cm, G::Mn)),
    (0x11F02, 0x11F02, (L::Ap, G::Lo)),
    (0x11F03, 0x11F03, (L::Cm, G::Mc)),
    (0x11F04, 0x11F10, (L::Ak, G::Lo)),
    (0x11F12, 0x11F33, (L::Ak, G::Lo)),
    (0x11F34, 0x11F35, (L::Cm, G::Mc)),
    (0x11F36, 0x11F3A, (L::Cm, G::Mn)),
    (0x11F3E, 0x11F3F, (L::Cm, G::Mc)),
    (0x11F40, 0x11F40, (L::Cm, G::Mn)),
    (0x11F41, 0x11F41, (L::Cm, G::Mc)),
    (0x11F42, 0x11F42, (L::Vi, G::Mn)),
    (0x11F43, 0x11F44, (L::Ba, G::Po)),
    (0x11F45, 0x11F4F, (L::Id, G::Po)),
    (0x11F50, 0x11F59, (L::As, G::Nd)),
    (0x11F5A, 0x11F5A, (L::Cm, G::Mn)),
    (0x11FB0, 0x11FB0, (L::Al, G::Lo)),
    (0x11FC0, 0x11FD4, (L::Al, G::No)),
    (0x11FD5, 0x11FDC, (L::Al, G::So)),
    (0x11FDD, 0x11FE0, (L::Po, G::Sc)),
    (0x11FE1, 0x11FF1, (L::Al, G::So)),
    (0x11FFF, 0x11FFF, (L::Ba, G::Po)),
    (0x12000, 0x12399, (L::Al, G::Lo)),
    (0x12400, 0x1246E, (L::Al, G::Nl)),
    (0x12470, 0x12474, (L::Ba, G::Po)),
    (0x12480, 0x12543, (L::Al, G::Lo)),
    (0x12F90, 0x12FF0, (L::Al, G::Lo)),
    (0x12FF1, 0x12FF2, (L::Al, G::Po)),
    (0x13000, 0x13257, (L::Al, G::Lo)),
    (0x13258, 0x1325A, (L::Op, G::Lo)),
    (0x1325B, 0x1325D, (L::Cl, G::Lo)),
    (0x1325E, 0x13281, (L::Al, G::Lo)),
    (0x13282, 0x13282, (L::Cl, G::Lo)),
    (0x13283, 0x13285, (L::Al, G::Lo)),
    (0x13286, 0x13286, (L::Op, G::Lo)),
    (0x13287, 0x13287, (L::Cl, G::Lo)),
    (0x13288, 0x13288, (L::Op, G::Lo)),
    (0x13289, 0x13289, (L::Cl, G::Lo)),
    (0x1328A, 0x13378, (L::Al, G::Lo)),
    (0x13379, 0x13379, (L::Op, G::Lo)),
    (0x1337A, 0x1337B, (L::Cl, G::Lo)),
    (0x1337C, 0x1342E, (L::Al, G::Lo)),
    (0x1342F, 0x1342F, (L::Op, G::Lo)),
    (0x13430, 0x13436, (L::Gl, G::Cf)),
    (0x13437, 0x13437, (L::Op, G::Cf)),
    (0x13438, 0x13438, (L::Cl, G::Cf)),
    (0x13439, 0x1343B, (L::Gl, G::Cf)),
    (0x1343C, 0x1343C, (L::Op, G::Cf)),
    (0x1343D, 0x1343D, (L::Cl, G::Cf)),
    (0x1343E, 0x1343E, (L::Op, G::Cf)),
    (0x1343F, 0x1343F, (L::Cl, G::Cf)),
    (0x13440, 0x13440, (L::Cm, G::Mn)),
    (0x13441, 0x13446, (L::Al, G::Lo)),
    (0x13447, 0x13455, (L::Cm, G::Mn)),
    (0x13460, 0x143FA, (L::Al, G::Lo)),
    (0x14400, 0x145CD, (L::Al, G::Lo)),
    (0x145CE, 0x145CE, (L::Op, G::Lo)),
    (0x145CF, 0x145CF, (L::Cl, G::Lo)),
    (0x145D0, 0x14646, (L::Al, G::Lo)),
    (0x16100, 0x1611D, (L::As, G::Lo)),
    (0x1611E, 0x16129, (L::Cm, G::Mn)),
    (0x1612A, 0x1612C, (L::Cm, G::Mc)),
    (0x1612D, 0x1612F, (L::Cm, G::Mn)),
    (0x16130, 0x16139, (L::As, G::Nd)),
    (0x16800, 0x16A38, (L::Al, G::Lo)),
    (0x16A40, 0x16A5E, (L::Al, G::Lo)),
    (0x16A60, 0x16A69, (L::Nu, G::Nd)),
    (0x16A6E, 0x16A6F, (L::Ba, G::Po)),
    (0x16A70, 0x16ABE, (L::Al, G::Lo)),
    (0x16AC0, 0x16AC9, (L::Nu, G::Nd)),
    (0x16AD0, 0x16AED, (L::Al, G::Lo)),
    (0x16AF0, 0x16AF4, (L::Cm, G::Mn)),
    (0x16AF5, 0x16AF5, (L::Ba, G::Po)),
    (0x16B00, 0x16B2F, (L::Al, G::Lo)),
    (0x16B30, 0x16B36, (L::Cm, G::Mn)),
    (0x16B37, 0x16B39, (L::Ba, G::Po)),
    (0x16B3A, 0x16B3B, (L::Al, G::Po)),
    (0x16B3C, 0x16B3F, (L::Al, G::So)),
    (0x16B40, 0x16B43, (L::Al, G::Lm)),
    (0x16B44, 0x16B44, (L::Ba, G::Po)),
    (0x16B45, 0x16B45, (L::Al, G::So)),
    (0x16B50, 0x16B59, (L::Nu, G::Nd)),
    (0x16B5B, 0x16B61, (L::Al, G::No)),
    (0x16B63, 0x16B77, (L::Al, G::Lo)),
    (0x16B7D, 0x16B8F, (L::Al, G::Lo)),
    (0x16D40, 0x16D42, (L::Al, G::Lm)),
    (0x16D43, 0x16D6A, (L::Al, G::Lo)),
    (0x16D6B, 0x16D6C, (L::Al, G::Lm)),
    (0x16D6D, 0x16D6D, (L::Al, G::Po)),
    (0x16D6E, 0x16D6F, (L::Ba, G::Po)),
    (0x16D70, 0x16D79, (L::Nu, G::Nd)),
    (0x16E40, 0x16E5F, (L::Al, G::Lu)),
    (0x16E60, 0x16E7F, (L::Al, G::Ll)),
    (0x16E80, 0x16E96, (L::Al, G::No)),
    (0x16E97, 0x16E98, (L::Ba, G::Po)),
    (0x16E99, 0x16E9A, (L::Al, G::Po)),
    (0x16EA0, 0x16EB8, (L::Al, G::Lu)),
    (0x16EBB, 0x16ED3, (L::Al, G::Ll)),
    (0x16F00, 0x16F4A, (L::Al, G::Lo)),
    (0x16F4F, 0x16F4F, (L::Cm, G::Mn)),
    (0x16F50, 0x16F50, (L::Al, G::Lo)),
    (0x16F51, 0x16F87, (L::Cm, G::Mc)),
    (0x16F8F, 0x16F92, (L::Cm, G::Mn)),
    (0x16F93, 0x16F9F, (L::Al, G::Lm)),
    (0x16FE0, 0x16FE1, (L::Ns, G::Lm)),
    (0x16FE2, 0x16FE2, (L::Ns, G::Po)),
    (0x16FE3, 0x16FE3, (L::Ns, G::Lm)),
    (0x16FE4, 0x16FE4, (L::Gl, G::Mn)),
    (0x16FF0, 0x16FF1, (L::Cm, G::Mc)),
    (0x16FF2, 0x16FF3, (L::Ns, G::Lm)),
    (0x16FF4, 0x16FF6, (L::Id, G::Nl)),
    (0x17000, 0x18AFF, (L::Id, G::Lo)),
    (0x18B00, 0x18CD5, (L::Al, G::Lo)),
    (0x18CFF, 0x18CFF, (L::Al, G::Lo)),
    (0x18D00, 0x18D1E, (L::Id, G::Lo)),
    (0x18D80, 0x18DF2, (L::Id, G::Lo)),
    (0x1AFF0, 0x1AFF3, (L::Al, G::Lm)),
    (0x1AFF5, 0x1AFFB, (L::Al, G::Lm)),
    (0x1AFFD, 0x1AFFE, (L::Al, G::Lm)),
    (0x1B000, 0x1B122, (L::Id, G::Lo)),
    (0x1B132, 0x1B132, (L::Cj, G::Lo)),
    (0x1B150, 0x1B152, (L::Cj, G::Lo)),
    (0x1B155, 0x1B155, (L::Cj, G::Lo)),
    (0x1B164, 0x1B167, (L::Cj, G::Lo)),
    (0x1B170, 0x1B2FB, (L::Id, G::Lo)),
    (0x1BC00, 0x1BC6A, (L::Al, G::Lo)),
    (0x1BC70, 0x1BC7C, (L::Al, G::Lo)),
    (0x1BC80, 0x1BC88, (L::Al, G::Lo)),
    (0x1BC90, 0x1BC99, (L::Al, G::Lo)),
    (0x1BC9C, 0x1BC9C, (L::Al, G::So)),
    (0x1BC9D, 0x1BC9E, (L::Cm, G::Mn)),
    (0x1BC9F, 0x1BC9F, (L::Ba, G::Po)),
    (0x1BCA0, 0x1BCA3, (L::Cm, G::Cf)),
    (0x1CC00, 0x1CCEF, (L::Al, G::So)),
    (0x1CCF0, 0x1CCF9, (L::Nu, G::Nd)),
    (0x1CCFA, 0x1CCFC, (L::Al, G::So)),
    (0x1CD00, 0x1CEB3, (L::Al, G::So)),
    (0x1CEBA, 0x1CED0, (L::Al, G::So)),
    (0x1CEE0, 0x1CEEF, (L::Al, G::So)),
    (0x1CEF0, 0x1CEF0, (L::Al, G::Sm)),
    (0x1CF00, 0x1CF2D, (L::Cm, G::Mn)),
    (0x1CF30, 0x1CF46, (L::Cm, G::Mn)),
    (0x1CF50, 0x1CFC3, (L::Al, G::So)),
    (0x1D000, 0x1D0F5, (L::Al, G::So)),
    (0x1D100, 0x1D126, (L::Al, G::So)),
    (0x1D129, 0x1D164, (L::Al, G::So)),
    (0x1D165, 0x1D166, (L::Cm, G::Mc)),
    (0x1D167, 0x1D169, (L::Cm, G::Mn)),
    (0x1D16A, 0x1D16C, (L::Al, G::So)),
    (0x1D16D, 0x1D172, (L::Cm, G::Mc)),
    (0x1D173, 0x1D17A, (L::Cm, G::Cf)),
    (0x1D17B, 0x1D182, (L::Cm, G::Mn)),
    (0x1D183, 0x1D184, (L::Al, G::So)),
    (0x1D185, 0x1D18B, (L::Cm, G::Mn)),
    (0x1D18C, 0x1D1A9, (L::Al, G::So)),
    (0x1D1AA, 0x1D1AD, (L::Cm, G::Mn)),
    (0x1D1AE, 0x1D1EA, (L::Al, G::So)),
    (0x1D200, 0x1D241, (L::Al, G::So)),
    (0x1D242, 0x1D244, (L::Cm, G::Mn)),
    (0x1D245, 0x1D245, (L::Al, G::So)),
    (0x1D2C0, 0x1D2D3, (L::Al, G::No)),
    (0x1D2E0, 0x1D2F3, (L::Al, G::No)),
    (0x1D300, 0x1D356, (L::Al, G::So)),
    (0x1D360, 0x1D378, (L::Al, G::No)),
    (0x1D400, 0x1D419, (L::Al, G::Lu)),
    (0x1D41A, 0x1D433, (L::Al, G::Ll)),
    (0x1D434, 0x1D44D, (L::Al, G::Lu)),
    (0x1D44E, 0x1D454, (L::Al, G::Ll)),
    (0x1D456, 0x1D467, (L::Al, G::Ll)),
    (0x1D468, 0x1D481, (L::Al, G::Lu)),
    (0x1D482, 0x1D49B, (L::Al, G::Ll)),
    (0x1D49C, 0x1D49C, (L::Al, G::Lu)),
    (0x1D49E, 0x1D49F, (L::Al, G::Lu)),
    (0x1D4A2, 0x1D4A2, (L::Al, G::Lu)),
    (0x1D4A5, 0x1D4A6, (L::Al, G::Lu)),
    (0x1D4A9, 0x1D4AC, (L::Al, G::Lu)),
    (0x1D4AE, 0x1D4B5, (L::Al, G::Lu)),
    (0x1D4B6, 0x1D4B9, (L::Al, G::Ll)),
    (0x1D4BB, 0x1D4BB, (L::Al, G::Ll)),
    (0x1D4BD, 0x1D4C3, (L::Al, G::Ll)),
    (0x1D4C5, 0x1D4CF, (L::Al, G::Ll)),
    (0x1D4D0, 0x1D4E9, (L::Al, G::Lu)),
    (0x1D4EA, 0x1D503, (L::Al, G::Ll)),
    (0x1D504, 0x1D505, (L::Al, G::Lu)),
    (0x1D507, 0x1D50A, (L::Al, G::Lu)),
    (0x1D50D, 0x1D514, (L::Al, G::Lu)),
    (0x1D516, 0x1D51C, (L::Al, G::Lu)),
    (0x1D51E, 0x1D537, (L::Al, G::Ll)),
    (0x1D538, 0x1D539, (L::Al, G::Lu)),
    (0x1D53B, 0x1D53E, (L::Al, G::Lu)),
    (0x1D540, 0x1D544, (L::Al, G::Lu)),
    (0x1D546, 0x1D546, (L::Al, G::Lu)),
    (0x1D54A, 0x1D550, (L::Al, G::Lu)),
    (0x1D552, 0x1D56B, (L::Al, G::Ll)),
    (0x1D56C, 0x1D585, (L::Al, G::Lu)),
    (0x1D586, 0x1D59F, (L::Al, G::Ll)),
    (0x1D5A0, 0x1D5B9, (L::Al, G::Lu)),
    (0x1D5BA, 0x1D5D3, (L::Al, G::Ll)),
    (0x1D5D4, 0x1D5ED, (L::Al, G::Lu)),
    (0x1D5EE, 0x1D607, (L::Al, G::Ll)),
    (0x1D608, 0x1D621, (L::Al, G::Lu)),
    (0x1D622, 0x1D63B, (L::Al, G::Ll)),
    (0x1D63C, 0x1D655, (L::Al, G::Lu)),
    (0x1D656, 0x1D66F, (L::Al, G::Ll)),
    (0x1D670, 0x1D689, (L::Al, G::Lu)),
    (0x1D68A, 0x1D6A5, (L::Al, G::Ll)),
    (0x1D6A8, 0x1D6C0, (L::Al, G::Lu)),
    (0x1D6C1, 0x1D6C1, (L::Al, G::Sm)),
    (0x1D6C2, 0x1D6DA, (L::Al, G::Ll)),
    (0x1D6DB, 0x1D6DB, (L::Al, G::Sm)),
    (0x1D6DC, 0x1D6E1, (L::Al, G::Ll)),
    (0x1D6E2, 0x1D6FA, (L::Al, G::Lu)),
    (0x1D6FB, 0x1D6FB, (L::Al, G::Sm)),
    (0x1D6FC, 0x1D714, (L::Al, G::Ll)),
    (0x1D715, 0x1D715, (L::Al, G::Sm)),
    (0x1D716, 0x1D71B, (L::Al, G::Ll)),
    (0x1D71C, 0x1D734, (L::Al, G::Lu)),
    (0x1D735, 0x1D735, (L::Al, G::Sm)),
    (0x1D736, 0x1D74E, (L::Al, G::Ll)),
    (0x1D74F, 0x1D74F, (L::Al, G::Sm)),
    (0x1D750, 0x1D755, (L::Al, G::Ll)),
    (0x1D756, 0x1D76E, (L::Al, G::Lu)),
    (0x1D76F, 0x1D76F, (L::Al, G::Sm)),
    (0x1D770, 0x1D788, (L::Al, G::Ll)),
    (0x1D789, 0x1D789, (L::Al, G::Sm)),
    (0x1D78A, 0x1D78F, (L::Al, G::Ll)),
    (0x1D790, 0x1D7A8, (L::Al, G::Lu)),
    (0x1D7A9, 0x1D7A9, (L::Al, G::Sm)),
    (0x1D7AA, 0x1D7C2, (L::Al, G::Ll)),
    (0x1D7C3, 0x1D7C3, (L::Al, G::Sm)),
    (0x1D7C4, 0x1D7C9, (L::Al, G::Ll)),
    (0x1D7CA, 0x1D7CA, (L::Al, G::Lu)),
    (0x1D7CB, 0x1D7CB, (L::Al, G::Ll)),
    (0x1D7CE, 0x1D7FF, (L::Nu, G::Nd)),
    (0x1D800, 0x1D9FF, (L::Al, G::So)),
    (0x1DA00, 0x1DA36, (L::Cm, G::Mn)),
    (0x1DA37, 0x1DA3A, (L::Al, G::So)),
    (0x1DA3B, 0x1DA6C, (L::Cm, G::Mn)),
    (0x1DA6D, 0x1DA74, (L::Al, G::So)),
    (0x1DA75, 0x1DA75, (L::Cm, G::Mn)),
    (0x1DA76, 0x1DA83, (L::Al, G::So)),
    (0x1DA84, 0x1DA84, (L::Cm, G::Mn)),
    (0x1DA85, 0x1DA86, (L::Al, G::So)),
    (0x1DA87, 0x1DA8A, (L::Ba, G::Po)),
    (0x1DA8B, 0x1DA8B, (L::Al, G::Po)),
    (0x1DA9B, 0x1DA9F, (L::Cm, G::Mn)),
    (0x1DAA1, 0x1DAAF, (L::Cm, G::Mn)),
    (0x1DF00, 0x1DF09, (L::Al, G::Ll)),
    (0x1DF0A, 0x1DF0A, (L::Al, G::Lo)),
    (0x1DF0B, 0x1DF1E, (L::Al, G::Ll)),
    (0x1DF25, 0x1DF2A, (L::Al, G::Ll)),
    (0x1E000, 0x1E006, (L::Cm, G::Mn)),
    (0x1E008, 0x1E018, (L::Cm, G::Mn)),
    (0x1E01B, 0x1E021, (L::Cm, G::Mn)),
    (0x1E023, 0x1E024, (L::Cm, G::Mn)),
    (0x1E026, 0x1E02A, (L::Cm, G::Mn)),
    (0x1E030, 0x1E06D, (L::Al, G::Lm)),
    (0x1E08F, 0x1E08F, (L::Cm, G::Mn)),
    (0x1E100, 0x1E12C, (L::Al, G::Lo)),
    (0x1E130, 0x1E136, (L::Cm, G::Mn)),
    (0x1E137, 0x1E13D, (L::Al, G::Lm)),
    (0x1E140, 0x1E149, (L::Nu, G::Nd)),
    (0x1E14E, 0x1E14E, (L::Al, G::Lo)),
    (0x1E14F, 0x1E14F, (L::Al, G::So)),
    (0x1E290, 0x1E2AD, (L::Al, G::Lo)),
    (0x1E2AE, 0x1E2AE, (L::Cm, G::Mn)),
    (0x1E2C0, 0x1E2EB, (L::Al, G::Lo)),
    (0x1E2EC, 0x1E2EF, (L::Cm, G::Mn)),
    (0x1E2F0, 0x1E2F9, (L::Nu, G::Nd)),
    (0x1E2FF, 0x1E2FF, (L::Pr, G::Sc)),
    (0x1E4D0, 0x1E4EA, (L::Al, G::Lo)),
    (0x1E4EB, 0x1E4EB, (L::Al, G::Lm)),
    (0x1E4EC, 0x1E4EF, (L::Cm, G::Mn)),
    (0x1E4F0, 0x1E4F9, (L::Nu, G::Nd)),
    (0x1E5D0, 0x1E5ED, (L::Al, G::Lo)),
    (0x1E5EE, 0x1E5EF, (L::Cm, G::Mn)),
    (0x1E5F0, 0x1E5F0, (L::Al, G::Lo)),
    (0x1E5F1, 0x1E5FA, (L::Nu, G::Nd)),
    (0x1E5FF, 0x1E5FF, (L::Al, G::Po)),
    (0x1E6C0, 0x1E6DE, (L::Al, G::Lo)),
    (0x1E6E0, 0x1E6E2, (L::Al, G::Lo)),
    (0x1E6E3, 0x1E6E3, (L::Cm, G::Mn)),
    (0x1E6E4, 0x1E6E5, (L::Al, G::Lo)),
    (0x1E6E6, 0x1E6E6, (L::Cm, G::Mn)),
    (0x1E6E7, 0x1E6ED, (L::Al, G::Lo)),
    (0x1E6EE, 0x1E6EF, (L::Cm, G::Mn)),
    (0x1E6F0, 0x1E6F4, (L::Al, G::Lo)),
    (0x1E6F5, 0x1E6F5, (L::Cm, G::Mn)),
    (0x1E6FE, 0x1E6FE, (L::Al, G::Lo)),
    (0x1E6FF, 0x1E6FF, (L::Al, G::Lm)),
    (0x1E7E0, 0x1E7E6, (L::Al, G::Lo)),
    (0x1E7E8, 0x1E7EB, (L::Al, G::Lo)),
    (0x1E7ED, 0x1E7EE, (L::Al, G::Lo)),
    (0x1E7F0, 0x1E7FE, (L::Al, G::Lo)),
    (0x1E800, 0x1E8C4, (L::Al, G::Lo)),
    (0x1E8C7, 0x1E8CF, (L::Al, G::No)),
    (0x1E8D0, 0x1E8D6, (L::Cm, G::Mn)),
    (0x1E900, 0x1E921, (L::Al, G::Lu)),
    (0x1E922, 0x1E943, (L::Al, G::Ll)),
    (0x1E944, 0x1E94A, (L::Cm, G::Mn)),
    (0x1E94B, 0x1E94B, (L::Al, G::Lm)),
    (0x1E950, 0x1E959, (L::Nu, G::Nd)),
    (0x1E95E, 0x1E95F, (L::Op, G::Po)),
    (0x1EC71, 0x1ECAB, (L::Al, G::No)),
    (0x1ECAC, 0x1ECAC, (L::Po, G::So)),
    (0x1ECAD, 0x1ECAF, (L::Al, G::No)),
    (0x1ECB0, 0x1ECB0, (L::Po, G::Sc)),
    (0x1ECB1, 0x1ECB4, (L::Al, G::No)),
    (0x1ED01, 0x1ED2D, (L::Al, G::No)),
    (0x1ED2E, 0x1ED2E, (L::Al, G::So)),
    (0x1ED2F, 0x1ED3D, (L::Al, G::No)),
    (0x1EE00, 0x1EE03, (L::Al, G::Lo)),
    (0x1EE05, 0x1EE1F, (L::Al, G::Lo)),
    (0x1EE21, 0x1EE22, (L::Al, G::Lo)),
    (0x1EE24, 0x1EE24, (L::Al, G::Lo)),
    (0x1EE27, 0x1EE27, (L::Al, G::Lo)),
    (0x1EE29, 0x1EE32, (L::Al, G::Lo)),
    (0x1EE34, 0x1EE37, (L::Al, G::Lo)),
    (0x1EE39, 0x1EE39, (L::Al, G::Lo)),
    (0x1EE3B, 0x1EE3B, (L::Al, G::Lo)),
    (0x1EE42, 0x1EE42, (L::Al, G::Lo)),
    (0x1EE47, 0x1EE47, (L::Al, G::Lo)),
    (0x1EE49, 0x1EE49, (L::Al, G::Lo)),
    (0x1EE4B, 0x1EE4B, (L::Al, G::Lo)),
    (0x1EE4D, 0x1EE4F, (L::Al, G::Lo)),
    (0x1EE51, 0x1EE52, (L::Al, G::Lo)),
    (0x1EE54, 0x1EE54, (L::Al, G::Lo)),
    (0x1EE57, 0x1EE57, (L::Al, G::Lo)),
    (0x1EE59, 0x1EE59, (L::Al, G::Lo)),
    (0x1EE5B, 0x1EE5B, (L::Al, G::Lo)),
    (0x1EE5D, 0x1EE5D, (L::Al, G::Lo)),
    (0x1EE5F, 0x1EE5F, (L::Al, G::Lo)),
    (0x1EE61, 0x1EE62, (L::Al, G::Lo)),
    (0x1EE64, 0x1EE64, (L::Al, G::Lo)),
    (0x1EE67, 0x1EE6A, (L::Al, G::Lo)),
    (0x1EE6C, 0x1EE72, (L::Al, G::Lo)),
    (0x1EE74, 0x1EE77, (L::Al, G::Lo)),
    (0x1EE79, 0x1EE7C, (L::Al, G::Lo)),
    (0x1EE7E, 0x1EE7E, (L::Al, G::Lo)),
    (0x1EE80, 0x1EE89, (L::Al, G::Lo)),
    (0x1EE8B, 0x1EE9B, (L::Al, G::Lo)),
    (0x1EEA1, 0x1EEA3, (L::Al, G::Lo)),
    (0x1EEA5, 0x1EEA9, (L::Al, G::Lo)),
    (0x1EEAB, 0x1EEBB, (L::Al, G::Lo)),
    (0x1EEF0, 0x1EEF1, (L::Al, G::Sm)),
    (0x1F000, 0x1F02B, (L::Id, G::So)),
    (0x1F02C, 0x1F02F, (L::Id, G::Cn)),
    (0x1F030, 0x1F093, (L::Id, G::So)),
    (0x1F094, 0x1F09F, (L::Id, G::Cn)),
    (0x1F0A0, 0x1F0AE, (L::Id, G::So)),
    (0x1F0AF, 0x1F0B0, (L::Id, G::Cn)),
    (0x1F0B1, 0x1F0BF, (L::Id, G::So)),
    (0x1F0C0, 0x1F0C0, (L::Id, G::Cn)),
    (0x1F0C1, 0x1F0CF, (L::Id, G::So)),
    (0x1F0D0, 0x1F0D0, (L::Id, G::Cn)),
    (0x1F0D1, 0x1F0F5, (L::Id, G::So)),
    (0x1F0F6, 0x1F0FF, (L::Id, G::Cn)),
    (0x1F100, 0x1F10C, (L::Ai, G::No)),
    (0x1F10D, 0x1F10F, (L::Al, G::So)),
    (0x1F110, 0x1F12D, (L::Ai, G::So)),
    (0x1F12E, 0x1F12F, (L::Al, G::So)),
    (0x1F130, 0x1F169, (L::Ai, G::So)),
    (0x1F16A, 0x1F16F, (L::Al, G::So)),
    (0x1F170, 0x1F1AC, (L::Ai, G::So)),
    (0x1F1AD, 0x1F1AD, (L::Al, G::So)),
    (0x1F1AE, 0x1F1E5, (L::Id, G::Cn)),
    (0x1F1E6, 0x1F1FF, (L::Ri, G::So)),
    (0x1F200, 0x1F202, (L::Id, G::So)),
    (0x1F203, 0x1F20F, (L::Id, G::Cn)),
    (0x1F210, 0x1F23B, (L::Id, G::So)),
    (0x1F23C, 0x1F23F, (L::Id, G::Cn)),
    (0x1F240, 0x1F248, (L::Id, G::So)),
    (0x1F249, 0x1F24F, (L::Id, G::Cn)),
    (0x1F250, 0x1F251, (L::Id, G::So)),
    (0x1F252, 0x1F25F, (L::Id, G::Cn)),
    (0x1F260, 0x1F265, (L::Id, G::So)),
    (0x1F266, 0x1F2FF, (L::Id, G::Cn)),
    (0x1F300, 0x1F384, (L::Id, G::So)),
    (0x1F385, 0x1F385, (L::Eb, G::So)),
    (0x1F386, 0x1F39B, (L::Id, G::So)),
    (0x1F39C, 0x1F39D, (L::Al, G::So)),
    (0x1F39E, 0x1F3B4, (L::Id, G::So)),
    (0x1F3B5, 0x1F3B6, (L::Al, G::So)),
    (0x1F3B7, 0x1F3BB, (L::Id, G::So)),
    (0x1F3BC, 0x1F3BC, (L::Al, G::So)),
    (0x1F3BD, 0x1F3C1, (L::Id, G::So)),
    (0x1F3C2, 0x1F3C4, (L::Eb, G::So)),
    (0x1F3C5, 0x1F3C6, (L::Id, G::So)),
    (0x1F3C7, 0x1F3C7, (L::Eb, G::So)),
    (0x1F3C8, 0x1F3C9, (L::Id, G::So)),
    (0x1F3CA, 0x1F3CC, (L::Eb, G::So)),
    (0x1F3CD, 0x1F3FA, (L::Id, G::So)),
    (0x1F3FB, 0x1F3FF, (L::Em, G::Sk)),
    (0x1F400, 0x1F441, (L::Id, G::So)),
    (0x1F442, 0x1F443, (L::Eb, G::So)),
    (0x1F444, 0x1F445, (L::Id, G::So)),
    (0x1F446, 0x1F450, (L::Eb, G::So)),
    (0x1F451, 0x1F465, (L::Id, G::So)),
    (0x1F466, 0x1F478, (L::Eb, G::So)),
    (0x1F479, 0x1F47B, (L::Id, G::So)),
    (0x1F47C, 0x1F47C, (L::Eb, G::So)),
    (0x1F47D, 0x1F480, (L::Id, G::So)),
    (0x1F481, 0x1F483, (L::Eb, G::So)),
    (0x1F484, 0x1F484, (L::Id, G::So)),
    (0x1F485, 0x1F487, (L::Eb, G::So)),
    (0x1F488, 0x1F48E, (L::Id, G::So)),
    (0x1F48F, 0x1F48F, (L::Eb, G::So)),
    (0x1F490, 0x1F490, (L::Id, G::So)),
    (0x1F491, 0x1F491, (L::Eb, G::So)),
    (0x1F492, 0x1F49F, (L::Id, G::So)),
    (0x1F4A0, 0x1F4A0, (L::Al, G::So)),
    (0x1F4A1, 0x1F4A1, (L::Id, G::So)),
    (0x1F4A2, 0x1F4A2, (L::Al, G::So)),
    (0x1F4A3, 0x1F4A3, (L::Id, G::So)),
    (0x1F4A4, 0x1F4A4, (L::Al, G::So)),
    (0x1F4A5, 0x1F4A9, (L::Id, G::So)),
    (0x1F4AA, 0x1F4AA, (L::Eb, G::So)),
    (0x1F4AB, 0x1F4AE, (L::Id, G::So)),
    (0x1F4AF, 0x1F4AF, (L::Al, G::So)),
    (0x1F4B0, 0x1F4B0, (L::Id, G::So)),
    (0x1F4B1, 0x1F4B2, (L::Al, G::So)),
    (0x1F4B3, 0x1F4FF, (L::Id, G::So)),
    (0x1F500, 0x1F506, (L::Al, G::So)),
    (0x1F507, 0x1F516, (L::Id, G::So)),
    (0x1F517, 0x1F524, (L::Al, G::So)),
    (0x1F525, 0x1F531, (L::Id, G::So)),
    (0x1F532, 0x1F549, (L::Al, G::So)),
    (0x1F54A, 0x1F573, (L::Id, G::So)),
    (0x1F574, 0x1F575, (L::Eb, G::So)),
    (0x1F576, 0x1F579, (L::Id, G::So)),
    (0x1F57A, 0x1F57A, (L::Eb, G::So)),
    (0x1F57B, 0x1F58F, (L::Id, G::So)),
    (0x1F590, 0x1F590, (L::Eb, G::So)),
    (0x1F591, 0x1F594, (L::Id, G::So)),
    (0x1F595, 0x1F596, (L::Eb, G::So)),
    (0x1F597, 0x1F5D3, (L::Id, G::So)),
    (0x1F5D4, 0x1F5DB, (L::Al, G::So)),
    (0x1F5DC, 0x1F5F3, (L::Id, G::So)),
    (0x1F5F4, 0x1F5F9, (L::Al, G::So)),
    (0x1F5FA, 0x1F644, (L::Id, G::So)),
    (0x1F645, 0x1F647, (L::Eb, G::So)),
    (0x1F648, 0x1F64A, (L::Id, G::So)),
    (0x1F64B, 0x1F64F, (L::Eb, G::So)),
    (0x1F650, 0x1F675, (L::Al, G::So)),
    (0x1F676, 0x1F678, (L::Qu, G::So)),
    (0x1F679, 0x1F67B, (L::Ns, G::So)),
    (0x1F67C, 0x1F67F, (L::Al, G::So)),
    (0x1F680, 0x1F6A2, (L::Id, G::So)),
    (0x1F6A3, 0x1F6A3, (L::Eb, G::So)),
    (0x1F6A4, 0x1F6B3, (L::Id, G::So)),
    (0x1F6B4, 0x1F6B6, (L::Eb, G::So)),
    (0x1F6B7, 0x1F6BF, (L::Id, G::So)),
    (0x1F6C0, 0x1F6C0, (L::Eb, G::So)),
    (0x1F6C1, 0x1F6CB, (L::Id, G::So)),
    (0x1F6CC, 0x1F6CC, (L::Eb, G::So)),
    (0x1F6CD, 0x1F6D8, (L::Id, G::So)),
    (0x1F6D9, 0x1F6DB, (L::Id, G::Cn)),
    (0x1F6DC, 0x1F6EC, (L::Id, G::So)),
    (0x1F6ED, 0x1F6EF, (L::Id, G::Cn)),
    (0x1F6F0, 0x1F6FC, (L::Id, G::So)),
    (0x1F6FD, 0x1F6FF, (L::Id, G::Cn)),
    (0x1F700, 0x1F773, (L::Al, G::So)),
    (0x1F774, 0x1F776, (L::Id, G::So)),
    (0x1F777, 0x1F77A, (L::Al, G::So)),
    (0x1F77B, 0x1F77F, (L::Id, G::So)),
    (0x1F780, 0x1F7D4, (L::Al, G::So)),
    (0x1F7D5, 0x1F7D9, (L::Id, G::So)),
    (0x1F7DA, 0x1F7DF, (L::Id, G::Cn)),
    (0x1F7E0, 0x1F7EB, (L::Id, G::So)),
    (0x1F7EC, 0x1F7EF, (L::Id, G::Cn)),
    (0x1F7F0, 0x1F7F0, (L::Id, G::So)),
    (0x1F7F1, 0x1F7FF, (L::Id, G::Cn)),
    (0x1F800, 0x1F80B, (L::Al, G::So)),
    (0x1F80C, 0x1F80F, (L::Xx, G::Cn)),
    (0x1F810, 0x1F847, (L::Al, G::So)),
    (0x1F848, 0x1F84F, (L::Xx, G::Cn)),
    (0x1F850, 0x1F859, (L::Al, G::So)),
    (0x1F85A, 0x1F85F, (L::Xx, G::Cn)),
    (0x1F860, 0x1F887, (L::Al, G::So)),
    (0x1F888, 0x1F88F, (L::Xx, G::Cn)),
    (0x1F890, 0x1F8AD, (L::Al, G::So)),
    (0x1F8AE, 0x1F8AF, (L::Xx, G::Cn)),
    (0x1F8B0, 0x1F8BB, (L::Al, G::So)),
    (0x1F8BC, 0x1F8BF, (L::Xx, G::Cn)),
    (0x1F8C0, 0x1F8C1, (L::Al, G::So)),
    (0x1F8C2, 0x1F8CF, (L::Xx, G::Cn)),
    (0x1F8D0, 0x1F8D8, (L::Al, G::Sm)),
    (0x1F8D9, 0x1F8FF, (L::Xx, G::Cn)),
    (0x1F900, 0x1F90B, (L::Al, G::So)),
    (0x1F90C, 0x1F90C, (L::Eb, G::So)),
    (0x1F90D, 0x1F90E, (L::Id, G::So)),
    (0x1F90F, 0x1F90F, (L::Eb, G::So)),
    (0x1F910, 0x1F917, (L::Id, G::So)),
    (0x1F918, 0x1F91F, (L::Eb, G::So)),
    (0x1F920, 0x1F925, (L::Id, G::So)),
    (0x1F926, 0x1F926, (L::Eb, G::So)),
    (0x1F927, 0x1F92F, (L::Id, G::So)),
    (0x1F930, 0x1F939, (L::Eb, G::So)),
    (0x1F93A, 0x1F93B, (L::Id, G::So)),
    (0x1F93C, 0x1F93E, (L::Eb, G::So)),
    (0x1F93F, 0x1F976, (L::Id, G::So)),
    (0x1F977, 0x1F977, (L::Eb, G::So)),
    (0x1F978, 0x1F9B4, (L::Id, G::So)),
    (0x1F9B5, 0x1F9B6, (L::Eb, G::So)),
    (0x1F9B7, 0x1F9B7, (L::Id, G::So)),
    (0x1F9B8, 0x1F9B9, (L::Eb, G::So)),
    (0x1F9BA, 0x1F9BA, (L::Id, G::So)),
    (0x1F9BB, 0x1F9BB, (L::Eb, G::So)),
    (0x1F9BC, 0x1F9CC, (L::Id, G::So)),
    (0x1F9CD, 0x1F9CF, (L::Eb, G::So)),
    (0x1F9D0, 0x1F9D0, (L::Id, G::So)),
    (0x1F9D1, 0x1F9DD, (L::Eb, G::So)),
    (0x1F9DE, 0x1F9FF, (L::Id, G::So)),
    (0x1FA00, 0x1FA57, (L::Al, G::So)),
    (0x1FA58, 0x1FA5F, (L::Id, G::Cn)),
    (0x1FA60, 0x1FA6D, (L::Id, G::So)),
    (0x1FA6E, 0x1FA6F, (L::Id, G::Cn)),
    (0x1FA70, 0x1FA7C, (L::Id, G::So)),
    (0x1FA7D, 0x1FA7F, (L::Id, G::Cn)),
    (0x1FA80, 0x1FA8A, (L::Id, G::So)),
    (0x1FA8B, 0x1FA8D, (L::Id, G::Cn)),
    (0x1FA8E, 0x1FAC2, (L::Id, G::So)),
    (0x1FAC3, 0x1FAC5, (L::Eb, G::So)),
    (0x1FAC6, 0x1FAC6, (L::Id, G::So)),
    (0x1FAC7, 0x1FAC7, (L::Id, G::Cn)),
    (0x1FAC8, 0x1FAC8, (L::Id, G::So)),
    (0x1FAC9, 0x1FACC, (L::Id, G::Cn)),
    (0x1FACD, 0x1FADC, (L::Id, G::So)),
    (0x1FADD, 0x1FADE, (L::Id, G::Cn)),
    (0x1FADF, 0x1FAEA, (L::Id, G::So)),
    (0x1FAEB, 0x1FAEE, (L::Id, G::Cn)),
    (0x1FAEF, 0x1FAEF, (L::Id, G::So)),
    (0x1FAF0, 0x1FAF8, (L::Eb, G::So)),
    (0x1FAF9, 0x1FAFF, (L::Id, G::Cn)),
    (0x1FB00, 0x1FB92, (L::Al, G::So)),
    (0x1FB94, 0x1FBEF, (L::Al, G::So)),
    (0x1FBF0, 0x1FBF9, (L::Nu, G::Nd)),
    (0x1FBFA, 0x1FBFA, (L::Al, G::So)),
    (0x1FC00, 0x1FFFD, (L::Id, G::Cn)),
    (0x20000, 0x2A6DF, (L::Id, G::Lo)),
    (0x2A6E0, 0x2A6FF, (L::Id, G::Cn)),
    (0x2A700, 0x2B81D, (L::Id, G::Lo)),
    (0x2B81E, 0x2B81F, (L::Id, G::Cn)),
    (0x2B820, 0x2CEAD, (L::Id, G::Lo)),
    (0x2CEAE, 0x2CEAF, (L::Id, G::Cn)),
    (0x2CEB0, 0x2EBE0, (L::Id, G::Lo)),
    (0x2EBE1, 0x2EBEF, (L::Id, G::Cn)),
    (0x2EBF0, 0x2EE5D, (L::Id, G::Lo)),
    (0x2EE5E, 0x2F7FF, (L::Id, G::Cn)),
    (0x2F800, 0x2FA1D, (L::Id, G::Lo)),
    (0x2FA1E, 0x2FFFD, (L::Id, G::Cn)),
    (0x30000, 0x3134A, (L::Id, G::Lo)),
    (0x3134B, 0x3134F, (L::Id, G::Cn)),
    (0x31350, 0x33479, (L::Id, G::Lo)),
    (0x3347A, 0x3FFFD, (L::Id, G::Cn)),
    (0xE0001, 0xE0001, (L::Cm, G::Cf)),
    (0xE0020, 0xE007F, (L::Cm, G::Cf)),
    (0xE0100, 0xE01EF, (L::Cm, G::Mn)),
]);
